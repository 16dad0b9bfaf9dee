use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrdError {
    #[error("PRD file not found: {0}")]
    DocumentNotFound(String),

    #[error("PRD file already exists: {0}")]
    DocumentExists(String),

    #[error("failed to parse PRD {path}: {source}")]
    DocumentParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrdError>;
