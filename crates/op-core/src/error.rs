//! Error types shared across the workspace

use thiserror::Error;

/// Errors surfaced by configuration and profile storage.
///
/// Misconfiguration inside the evaluation path is never an error: bad
/// expressions, missing keys, and unmatched extension names all degrade to
/// neutral input so a broken profile can never halt emulation. These
/// variants cover real I/O and parse failures only.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile parse error: {0}")]
    ProfileParse(#[from] toml::de::Error),

    #[error("profile serialize error: {0}")]
    ProfileSerialize(#[from] toml::ser::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// Convenience result alias
pub type Result<T> = std::result::Result<T, CoreError>;
