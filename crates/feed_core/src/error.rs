use thiserror::Error;

use crate::VideoId;

/// Why a feed load ended in `Failed`. The `Display` text is the user-facing reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadFailure {
    #[error("no videos available")]
    Empty,
    #[error("duplicate video id {0}")]
    DuplicateId(VideoId),
    #[error("{0}")]
    Source(String),
}
