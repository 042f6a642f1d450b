use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid digest: {0}")]
    InvalidDigest(String),
    #[error("Allocation list is empty")]
    EmptyAllocation,
    #[error("Allocation list has {0} entries, more than the program accepts")]
    TooManyClaims(usize),
    #[error("Index {0} is out of range")]
    IndexOutOfRange(u64),
    #[error("Program error: {0}")]
    Program(anchor_lang::error::Error),
}

impl From<anchor_lang::error::Error> for BackendError {
    fn from(e: anchor_lang::error::Error) -> Self {
        BackendError::Program(e)
    }
}

pub type Result<T> = std::result::Result<T, BackendError>;
