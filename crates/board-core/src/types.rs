use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "zh" | "zh-cn" => Ok(Locale::Zh),
            _ => Err(crate::error::BoardError::InvalidLocale(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle state of one production stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Todo,
    Doing,
    Revision,
    Done,
}

impl Status {
    /// Display order used by the status distribution chart and legend.
    pub fn all() -> &'static [Status] {
        &[Status::Done, Status::Doing, Status::Revision, Status::Todo]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::Doing => "doing",
            Status::Revision => "revision",
            Status::Done => "done",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Status::Todo, Locale::En) => "Not started",
            (Status::Doing, Locale::En) => "In progress",
            (Status::Revision, Locale::En) => "Revision",
            (Status::Done, Locale::En) => "Done",
            (Status::Todo, Locale::Zh) => "未开始",
            (Status::Doing, Locale::Zh) => "进行中",
            (Status::Revision, Locale::Zh) => "返修中",
            (Status::Done, Locale::Zh) => "已完成",
        }
    }

    /// Chart color, shared by the pie slices and the HTML badges.
    pub fn color(self) -> &'static str {
        match self {
            Status::Todo => "#F3F4F6",
            Status::Doing => "#3B82F6",
            Status::Revision => "#EF4444",
            Status::Done => "#22C55E",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" | "not-started" | "not_started" => Ok(Status::Todo),
            "doing" | "in-progress" | "in_progress" => Ok(Status::Doing),
            "revision" => Ok(Status::Revision),
            "done" => Ok(Status::Done),
            _ => Err(crate::error::BoardError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    P0,
    P1,
    P2,
}

impl Priority {
    pub fn all() -> &'static [Priority] {
        &[Priority::P0, Priority::P1, Priority::P2]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::P0 => "p0",
            Priority::P1 => "p1",
            Priority::P2 => "p2",
        }
    }

    /// Short badge text, e.g. `P0`.
    pub fn badge(self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Priority::P0, Locale::En) => "P0 Core",
            (Priority::P1, Locale::En) => "P1 Important",
            (Priority::P2, Locale::En) => "P2 Regular",
            (Priority::P0, Locale::Zh) => "P0 核心",
            (Priority::P1, Locale::Zh) => "P1 重要",
            (Priority::P2, Locale::Zh) => "P2 常规",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p0" => Ok(Priority::P0),
            "p1" => Ok(Priority::P1),
            "p2" => Ok(Priority::P2),
            _ => Err(crate::error::BoardError::InvalidPriority(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// One of the four production steps tracked for every character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Illustration,
    Chibi,
    Spine2d,
    SpineAnim,
}

impl Stage {
    pub fn all() -> &'static [Stage] {
        &[
            Stage::Illustration,
            Stage::Chibi,
            Stage::Spine2d,
            Stage::SpineAnim,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Illustration => "illustration",
            Stage::Chibi => "chibi",
            Stage::Spine2d => "spine2d",
            Stage::SpineAnim => "spine_anim",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Stage::Illustration, Locale::En) => "Illustration",
            (Stage::Chibi, Locale::En) => "Chibi",
            (Stage::Spine2d, Locale::En) => "2D split",
            (Stage::SpineAnim, Locale::En) => "Spine anim",
            (Stage::Illustration, Locale::Zh) => "正比立绘",
            (Stage::Chibi, Locale::Zh) => "Q版跑图",
            (Stage::Spine2d, Locale::Zh) => "2D拆分",
            (Stage::SpineAnim, Locale::Zh) => "Spine动画",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Stage {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "illustration" => Ok(Stage::Illustration),
            "chibi" => Ok(Stage::Chibi),
            "spine2d" | "spine_2d" => Ok(Stage::Spine2d),
            "spine_anim" | "spine-anim" | "spineAnim" => Ok(Stage::SpineAnim),
            _ => Err(crate::error::BoardError::InvalidStage(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ViewMode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Dashboard,
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Dashboard => "dashboard",
            ViewMode::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(ViewMode::Dashboard),
            "list" | "table" => Ok(ViewMode::List),
            _ => Err(crate::error::BoardError::InvalidView(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_aliases() {
        assert_eq!("not-started".parse::<Status>().unwrap(), Status::Todo);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::Doing);
        assert_eq!("revision".parse::<Status>().unwrap(), Status::Revision);
        assert!("finished".parse::<Status>().is_err());
    }

    #[test]
    fn priority_parse_is_case_insensitive() {
        assert_eq!("P0".parse::<Priority>().unwrap(), Priority::P0);
        assert_eq!("p2".parse::<Priority>().unwrap(), Priority::P2);
        assert!("p3".parse::<Priority>().is_err());
    }

    #[test]
    fn stage_order_is_fixed() {
        let names: Vec<&str> = Stage::all().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["illustration", "chibi", "spine2d", "spine_anim"]);
        for (i, stage) in Stage::all().iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }

    #[test]
    fn stage_serializes_snake_case() {
        let json = serde_json::to_string(&Stage::SpineAnim).unwrap();
        assert_eq!(json, "\"spine_anim\"");
        let parsed: Stage = "spineAnim".parse().unwrap();
        assert_eq!(parsed, Stage::SpineAnim);
    }

    #[test]
    fn labels_follow_locale() {
        assert_eq!(Status::Revision.label(Locale::En), "Revision");
        assert_eq!(Status::Revision.label(Locale::Zh), "返修中");
        assert_eq!(Stage::Chibi.label(Locale::Zh), "Q版跑图");
        assert_eq!(Priority::P1.label(Locale::Zh), "P1 重要");
    }

    #[test]
    fn view_mode_accepts_table_alias() {
        assert_eq!("table".parse::<ViewMode>().unwrap(), ViewMode::List);
        assert_eq!(ViewMode::default(), ViewMode::Dashboard);
        assert!("grid".parse::<ViewMode>().is_err());
    }
}
