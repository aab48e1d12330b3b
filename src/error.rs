use thiserror::Error;

pub type Result<T> = std::result::Result<T, BotError>;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("catalog error: {0}")]
    Catalog(String),
    #[error("payment gateway error: {0}")]
    Gateway(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("catalog seed error: {0}")]
    Seed(#[from] serde_json::Error),
}
