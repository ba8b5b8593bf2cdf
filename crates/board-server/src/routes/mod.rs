pub mod characters;
pub mod config;
pub mod page;
pub mod stats;

use board_core::stats::{PriorityFilter, SortKey};
use board_core::types::{Locale, ViewMode};
use board_core::{BoardError, Result};
use serde::Deserialize;

/// Raw query parameters shared by the API and the HTML page. Values are
/// parsed after extraction so malformed input becomes a JSON 400.
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    pub priority: Option<String>,
    pub view: Option<String>,
    pub sort: Option<String>,
    pub reverse: Option<String>,
    pub locale: Option<String>,
}

impl BoardQuery {
    pub fn filter(&self, default: PriorityFilter) -> Result<PriorityFilter> {
        parse_or(self.priority.as_deref(), default)
    }

    pub fn view(&self, default: ViewMode) -> Result<ViewMode> {
        parse_or(self.view.as_deref(), default)
    }

    pub fn sort(&self) -> Result<SortKey> {
        parse_or(self.sort.as_deref(), SortKey::default())
    }

    pub fn locale(&self, default: Locale) -> Result<Locale> {
        parse_or(self.locale.as_deref(), default)
    }

    /// `reverse=true` or `reverse=false`; absent or blank means false.
    pub fn reverse(&self) -> Result<bool> {
        match self.reverse.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None | Some("false") => Ok(false),
            Some("true") => Ok(true),
            Some(other) => Err(BoardError::InvalidFlag(other.to_string())),
        }
    }
}

fn parse_or<T>(raw: Option<&str>, default: T) -> Result<T>
where
    T: std::str::FromStr<Err = board_core::BoardError>,
{
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.parse(),
        None => Ok(default),
    }
}
