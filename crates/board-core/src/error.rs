use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("not initialized: run 'board init'")]
    NotInitialized,

    #[error("character not found: {0}")]
    CharacterNotFound(String),

    #[error("invalid status '{0}': expected todo, doing, revision or done")]
    InvalidStatus(String),

    #[error("invalid priority '{0}': expected p0, p1 or p2")]
    InvalidPriority(String),

    #[error("invalid priority filter '{0}': expected all, p0, p1 or p2")]
    InvalidFilter(String),

    #[error("invalid stage: {0}")]
    InvalidStage(String),

    #[error("invalid view '{0}': expected dashboard or list")]
    InvalidView(String),

    #[error("invalid sort key '{0}': expected roster, id, name, priority or progress")]
    InvalidSortKey(String),

    #[error("invalid locale '{0}': expected en or zh")]
    InvalidLocale(String),

    #[error("invalid flag value '{0}': expected true or false")]
    InvalidFlag(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// True for errors caused by a malformed user-supplied value.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            BoardError::InvalidStatus(_)
                | BoardError::InvalidPriority(_)
                | BoardError::InvalidFilter(_)
                | BoardError::InvalidStage(_)
                | BoardError::InvalidView(_)
                | BoardError::InvalidSortKey(_)
                | BoardError::InvalidLocale(_)
                | BoardError::InvalidFlag(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
