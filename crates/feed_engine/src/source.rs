use std::path::PathBuf;

use feed_core::VideoRecord;

use crate::{SourceError, SourceErrorKind};

const EMBEDDED_FEED: &str = include_str!("../assets/mock_feed.json");

/// Supplies the ordered feed records. An empty list is a valid answer.
#[async_trait::async_trait]
pub trait VideoSource: Send + Sync {
    async fn list(&self) -> Result<Vec<VideoRecord>, SourceError>;
}

/// Fixed, in-memory record list.
#[derive(Debug, Clone, Default)]
pub struct StaticVideoSource {
    records: Vec<VideoRecord>,
}

impl StaticVideoSource {
    pub fn from_records(records: Vec<VideoRecord>) -> Self {
        Self { records }
    }

    /// The mock dataset compiled into the binary.
    pub fn embedded() -> Result<Self, SourceError> {
        decode_records(EMBEDDED_FEED.as_bytes()).map(Self::from_records)
    }
}

#[async_trait::async_trait]
impl VideoSource for StaticVideoSource {
    async fn list(&self) -> Result<Vec<VideoRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Reads a JSON array of records from disk on every `list` call.
#[derive(Debug, Clone)]
pub struct JsonFileVideoSource {
    path: PathBuf,
}

impl JsonFileVideoSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl VideoSource for JsonFileVideoSource {
    async fn list(&self) -> Result<Vec<VideoRecord>, SourceError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            SourceError::new(
                SourceErrorKind::Io,
                format!("{}: {err}", self.path.display()),
            )
        })?;
        decode_records(&bytes)
    }
}

pub(crate) fn decode_records(bytes: &[u8]) -> Result<Vec<VideoRecord>, SourceError> {
    serde_json::from_slice(bytes)
        .map_err(|err| SourceError::new(SourceErrorKind::Decode, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_feed_holds_the_mock_record() {
        let source = StaticVideoSource::embedded().expect("embedded feed parses");
        assert_eq!(source.records.len(), 1);
        let record = &source.records[0];
        assert_eq!(record.id, 1);
        assert_eq!(record.title, "StartupIndia");
        assert_eq!(record.likes, "200K");
        assert_eq!(record.video_url, "https://www.w3schools.com/html/mov_bbb.mp4");
        assert!(record.is_paid);
    }

    #[test]
    fn decode_rejects_non_array_payload() {
        let err = decode_records(br#"{"id": 1}"#).unwrap_err();
        assert_eq!(err.kind, SourceErrorKind::Decode);
    }
}
