//! Error types shared across the crate

use thiserror::Error;

use crate::hint::ScreenId;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, HintError>;

/// Failures reported by a platform backend
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The input source has no more events to deliver
    #[error("input stream closed")]
    InputClosed,
    #[error("unknown screen {0:?}")]
    UnknownScreen(ScreenId),
}

/// Errors surfaced by hint generation, selection and configuration
#[derive(Debug, Error)]
pub enum HintError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error("no screens available")]
    NoScreens,
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("settings format error: {0}")]
    Yaml(#[from] serde_yml::Error),
    #[error("history format error: {0}")]
    Json(#[from] serde_json::Error),
}
