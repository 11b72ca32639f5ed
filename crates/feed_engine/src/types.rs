use std::fmt;

use feed_core::{LoadFailure, MountId, VideoRecord};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderEvent {
    Loaded {
        mount: MountId,
        result: Result<Vec<VideoRecord>, LoadFailure>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct SourceError {
    pub kind: SourceErrorKind,
    pub message: String,
}

impl SourceError {
    pub(crate) fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<SourceError> for LoadFailure {
    fn from(err: SourceError) -> Self {
        LoadFailure::Source(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceErrorKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Network,
    Io,
    Decode,
}

impl fmt::Display for SourceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceErrorKind::InvalidUrl => write!(f, "invalid url"),
            SourceErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            SourceErrorKind::Timeout => write!(f, "timeout"),
            SourceErrorKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            SourceErrorKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            SourceErrorKind::Network => write!(f, "network error"),
            SourceErrorKind::Io => write!(f, "io error"),
            SourceErrorKind::Decode => write!(f, "malformed feed data"),
        }
    }
}
