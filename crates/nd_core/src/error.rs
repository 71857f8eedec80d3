use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("Duplicate article id in catalog: {0}")]
    DuplicateId(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Widget error: {0}")]
    Widget(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
