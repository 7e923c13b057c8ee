//! Error types for Timecalc

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Cannot determine {0} directory")]
    NoDirectory(&'static str),

    #[error("Service error: {0}")]
    Service(String),

    #[error("UI error: {0}")]
    Platform(#[from] slint::PlatformError),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] slint::EventLoopError),
}

pub type Result<T> = std::result::Result<T, Error>;
