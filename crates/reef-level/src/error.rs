use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid level: {0}")]
    Invalid(String),
}

pub type LevelResult<T> = Result<T, LevelError>;
