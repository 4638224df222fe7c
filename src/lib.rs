pub mod config;
pub mod llm;
pub mod lookup;
pub mod parser;
pub mod tui;

pub use config::Config;
pub use parser::{Classification, CookieRecord};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CookieFinderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CookieFinderError>;
