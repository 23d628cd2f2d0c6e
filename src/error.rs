// Error types for report conversion

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid Cucumber JSON report: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML serialization error: {0}")]
    Xml(String),

    #[error("Invalid TOML configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, Error>;
