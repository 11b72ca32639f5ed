//! Feed engine: video record sources and the asynchronous feed loader.
mod engine;
mod http;
mod loader;
mod source;
mod types;

pub use engine::{load_unless_cancelled, LoaderHandle};
pub use http::{HttpSettings, HttpVideoSource};
pub use loader::{EmptyFeedPolicy, FeedLoader, LoaderSettings};
pub use source::{JsonFileVideoSource, StaticVideoSource, VideoSource};
pub use types::{LoaderEvent, SourceError, SourceErrorKind};

pub use tokio_util::sync::CancellationToken;
