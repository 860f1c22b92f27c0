use thiserror::Error;

#[derive(Error, Debug)]
pub enum GloomError {
    #[error("Actor not found: {0}")]
    ActorNotFound(crate::core::types::ActorId),

    #[error("Invalid map: {0}")]
    InvalidMap(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GloomError>;
