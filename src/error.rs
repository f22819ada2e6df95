//! Error types
//!
//! Task completion is not an error: see `sim::Step::Done`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings")]
    Settings(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("malformed frame {category}/{name}: {reason}")]
    Asset {
        category: String,
        name: String,
        reason: String,
    },

    #[error("no frames available in category `{category}` (searched {root:?})")]
    MissingFrames {
        category: String,
        root: Option<PathBuf>,
    },

    #[error("task `{task}` failed: {reason}")]
    Task { task: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
