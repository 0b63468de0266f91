use thiserror::Error;

/// Errors raised at the boundaries around the scorer
///
/// Scoring itself is total; these only come from validation and I/O.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid partner preferences: {0}")]
    InvalidPreferences(validator::ValidationErrors),

    #[error("Invalid search request: {0}")]
    InvalidSearch(validator::ValidationErrors),

    #[error("No input file: pass a path or set MATRIMONY_INPUT")]
    MissingInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, MatchError>;
