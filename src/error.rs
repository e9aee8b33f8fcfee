use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown category key '{key}' (expected one of: {expected})")]
    UnknownCategory { key: String, expected: String },

    #[error("Unknown locale '{code}' (supported: ru, en, zh)")]
    UnknownLocale { code: String },

    #[error("Invalid place record: {0}")]
    InvalidPlace(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP server error: {0}")]
    Server(#[from] hyper::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
