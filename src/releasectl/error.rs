use reqwest::Method;
use thiserror::Error;

/// Coarse classification of a [`ReleaseError`], stable across implementations
/// of [`crate::platform::PlatformClient`] so callers can branch without
/// matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Remote,
    NotFound,
    Ambiguous,
    Config,
    Io,
    Serialization,
}

#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("{op} ({method} {endpoint}): {source}")]
    Transport {
        op: &'static str,
        method: Method,
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{op} ({method} {endpoint}): status {status}")]
    Status {
        op: &'static str,
        method: Method,
        endpoint: String,
        status: u16,
    },

    #[error("{op}: failed to decode response: {message}")]
    Decode { op: &'static str, message: String },

    #[error("not found")]
    NotFound,

    #[error("could not find channel {0:?}")]
    ChannelNotFound(String),

    #[error("channel {0:?} is ambiguous, please use channel ID")]
    AmbiguousChannel(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ReleaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReleaseError::Transport { .. }
            | ReleaseError::Status { .. }
            | ReleaseError::Decode { .. } => ErrorKind::Remote,
            ReleaseError::NotFound | ReleaseError::ChannelNotFound(_) => ErrorKind::NotFound,
            ReleaseError::AmbiguousChannel(_) => ErrorKind::Ambiguous,
            ReleaseError::Config(_) => ErrorKind::Config,
            ReleaseError::Io(_) => ErrorKind::Io,
            ReleaseError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, ReleaseError>;
