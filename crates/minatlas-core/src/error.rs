use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("table codec error: {0}")]
    Csv(#[from] csv::Error),

    #[error("username already taken: {0}")]
    DuplicateUsername(String),

    #[error("an account cannot delete itself")]
    SelfDeletion,
}

pub type Result<T> = std::result::Result<T, Error>;
