use std::path::PathBuf;

use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Start-up and shutdown failures of the system as a whole.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed seed file {path}: {source}")]
    SeedFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot seed club store: {0}")]
    Seed(#[from] FrameworkError),
    #[error("store actor task failed: {0}")]
    ActorTask(String),
}
