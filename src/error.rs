use thiserror::Error;

#[derive(Error, Debug)]
pub enum FdtError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Protocol error: {0}")]
    ProtocolError(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid PTZ preset: {0}")]
    InvalidPreset(#[from] std::num::ParseIntError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid service call: {0}")]
    InvalidServiceCall(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FdtError>;
