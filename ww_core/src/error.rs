use thiserror::Error;
pub type Result<T> = std::result::Result<T, crate::error::ErrorCore>;

#[derive(Debug, Error)]
pub enum ErrorCore {
    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),
}
