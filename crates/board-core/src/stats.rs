//! Aggregation over the roster: per-status counts, completion rate and
//! per-stage backlog, all scoped by a priority filter.

use crate::character::Character;
use crate::error::{BoardError, Result};
use crate::types::{Priority, Stage, Status};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

/// `numerator / denominator` as a whole percentage, rounding halves up.
/// Returns 0 for an empty denominator.
pub fn percent(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 0;
    }
    ((200 * numerator + denominator) / (2 * denominator)) as u32
}

// ---------------------------------------------------------------------------
// PriorityFilter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(self, character: &Character) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => character.priority == p,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriorityFilter::All => "all",
            PriorityFilter::Only(p) => p.as_str(),
        }
    }

    /// Every selectable filter, in selector order.
    pub fn choices() -> [PriorityFilter; 4] {
        [
            PriorityFilter::All,
            PriorityFilter::Only(Priority::P0),
            PriorityFilter::Only(Priority::P1),
            PriorityFilter::Only(Priority::P2),
        ]
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PriorityFilter {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(PriorityFilter::All);
        }
        s.parse::<Priority>()
            .map(PriorityFilter::Only)
            .map_err(|_| BoardError::InvalidFilter(s.to_string()))
    }
}

impl From<PriorityFilter> for String {
    fn from(f: PriorityFilter) -> Self {
        f.as_str().to_string()
    }
}

impl TryFrom<String> for PriorityFilter {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

pub fn filter(roster: &[Character], by: PriorityFilter) -> Vec<&Character> {
    roster.iter().filter(|c| by.matches(c)).collect()
}

// ---------------------------------------------------------------------------
// StatusCounts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub done: usize,
    pub doing: usize,
    pub revision: usize,
    pub todo: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Done => self.done += 1,
            Status::Doing => self.doing += 1,
            Status::Revision => self.revision += 1,
            Status::Todo => self.todo += 1,
        }
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Done => self.done,
            Status::Doing => self.doing,
            Status::Revision => self.revision,
            Status::Todo => self.todo,
        }
    }

    pub fn total(&self) -> usize {
        self.done + self.doing + self.revision + self.todo
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Stage-level totals for one filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub filter: PriorityFilter,
    pub total_characters: usize,
    /// One item per (character, stage) pair.
    pub total_items: usize,
    /// Share of items that are done, 0-100.
    pub progress: u32,
    pub counts: StatusCounts,
}

pub fn summarize(roster: &[Character], by: PriorityFilter) -> Stats {
    let rows = filter(roster, by);
    let mut counts = StatusCounts::default();
    for character in &rows {
        for status in character.statuses() {
            counts.record(status);
        }
    }
    let total_items = counts.total();
    Stats {
        filter: by,
        total_characters: rows.len(),
        total_items,
        progress: percent(counts.done, total_items),
        counts,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusShare {
    pub status: Status,
    pub count: usize,
    pub percent: u32,
}

/// Pie-chart slices in done, doing, revision, todo order.
pub fn status_shares(counts: &StatusCounts) -> Vec<StatusShare> {
    let total = counts.total();
    Status::all()
        .iter()
        .map(|&status| {
            let count = counts.get(status);
            StatusShare {
                status,
                count,
                percent: percent(count, total),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// StageStats
// ---------------------------------------------------------------------------

/// Revision and in-progress backlog of one stage. Percentages are relative
/// to the number of characters in the selection.
///
/// `revision_pct` and `doing_pct` are rounded independently and are not
/// normalized against each other, so their sum can exceed 100 by one
/// (1 and 7 of 8 give 13 and 88). Renderers clip the combined lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageStats {
    pub stage: Stage,
    pub revision: usize,
    pub doing: usize,
    pub revision_pct: u32,
    pub doing_pct: u32,
}

pub fn stage_breakdown(roster: &[Character], by: PriorityFilter) -> Vec<StageStats> {
    let rows = filter(roster, by);
    let width = rows.len().max(1);
    Stage::all()
        .iter()
        .map(|&stage| {
            let mut counts = StatusCounts::default();
            for character in &rows {
                counts.record(character.status(stage));
            }
            StageStats {
                stage,
                revision: counts.revision,
                doing: counts.doing,
                revision_pct: percent(counts.revision, width),
                doing_pct: percent(counts.doing, width),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Rows and sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Board order.
    #[default]
    Roster,
    Id,
    Name,
    /// P0 first.
    Priority,
    /// Most complete first.
    Progress,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Roster => "roster",
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Priority => "priority",
            SortKey::Progress => "progress",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "roster" | "default" => Ok(SortKey::Roster),
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "priority" => Ok(SortKey::Priority),
            "progress" => Ok(SortKey::Progress),
            _ => Err(BoardError::InvalidSortKey(s.to_string())),
        }
    }
}

/// A table row: the character plus its derived completion.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterRow<'a> {
    #[serde(flatten)]
    pub character: &'a Character,
    pub done_stages: usize,
    pub progress: u32,
}

impl<'a> From<&'a Character> for CharacterRow<'a> {
    fn from(character: &'a Character) -> Self {
        Self {
            character,
            done_stages: character.done_stages(),
            progress: character.progress(),
        }
    }
}

/// Filter the roster and order the result. Sorting is stable, so ties keep
/// board order; `reverse` flips the final order.
pub fn rows(
    roster: &[Character],
    by: PriorityFilter,
    key: SortKey,
    reverse: bool,
) -> Vec<CharacterRow<'_>> {
    let mut rows: Vec<CharacterRow<'_>> = filter(roster, by).into_iter().map(Into::into).collect();
    match key {
        SortKey::Roster => {}
        SortKey::Id => rows.sort_by(|a, b| a.character.id.cmp(&b.character.id)),
        SortKey::Name => rows.sort_by(|a, b| a.character.name.cmp(&b.character.name)),
        SortKey::Priority => rows.sort_by_key(|r| r.character.priority),
        SortKey::Progress => rows.sort_by_key(|r| Reverse(r.progress)),
    }
    if reverse {
        rows.reverse();
    }
    rows
}

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

/// Everything both views need for one filter selection.
#[derive(Debug, Clone, Serialize)]
pub struct Breakdown {
    pub stats: Stats,
    pub shares: Vec<StatusShare>,
    pub stages: Vec<StageStats>,
}

impl Breakdown {
    pub fn compute(roster: &[Character], by: PriorityFilter) -> Self {
        let stats = summarize(roster, by);
        Self {
            shares: status_shares(&stats.counts),
            stages: stage_breakdown(roster, by),
            stats,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
