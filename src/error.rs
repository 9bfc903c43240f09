//! Error types
//!
//! Only construction can fail: a missing asset or a bad settings file aborts
//! startup. Once a `Gameplay` exists, every tick is infallible.

/// Asset loading errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// No asset registered under this name
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Asset exists but is a different kind (e.g. a sound where a texture was asked for)
    #[error("Asset '{name}' is not a {expected}")]
    WrongKind { name: String, expected: &'static str },
}

/// Settings loading errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Tuning value out of range
    #[error("Invalid settings: {0}")]
    Invalid(String),
}
