//! Error types for FiFi
//!
//! The engine itself is total: malformed survey input, unknown transitions and
//! lookup misses all degrade to safe defaults. These variants cover the
//! infrastructure around it (config files, the store task, serialization).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Store is shut down")]
    StoreClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
