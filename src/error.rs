#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid input document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, Error>;
