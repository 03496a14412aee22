use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("telemetry feed is already running")]
    AlreadyRunning,
    #[error("no async runtime available to schedule the feed timer")]
    NoRuntime,
    #[error("tick period must be greater than zero")]
    ZeroPeriod,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown map layer `{0}` (expected `ndvi` or `farm`)")]
pub struct UnknownLayer(pub String);
