use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouletteError {
    #[error("Magazine is empty")]
    EmptyMagazine,

    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("Malformed statements: {0}")]
    MalformedStatements(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RouletteError>;
