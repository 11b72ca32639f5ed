use std::sync::Arc;
use std::time::Duration;

use feed_core::{first_duplicate_id, LoadFailure, VideoRecord};
use feed_logging::{feed_debug, feed_warn};
use serde::{Deserialize, Serialize};

use crate::VideoSource;

/// What a successful but empty source answer turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyFeedPolicy {
    /// Treat an empty feed as a load failure.
    #[default]
    Fail,
    /// Deliver an empty ready feed.
    ShowEmpty,
}

#[derive(Debug, Clone)]
pub struct LoaderSettings {
    /// Simulated network latency before the source is queried.
    pub latency: Duration,
    pub empty_feed: EmptyFeedPolicy,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(1000),
            empty_feed: EmptyFeedPolicy::Fail,
        }
    }
}

#[derive(Clone)]
pub struct FeedLoader {
    source: Arc<dyn VideoSource>,
    settings: LoaderSettings,
}

impl FeedLoader {
    pub fn new(source: Arc<dyn VideoSource>, settings: LoaderSettings) -> Self {
        Self { source, settings }
    }

    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    /// Runs one load: waits out the latency, queries the source and validates the answer.
    pub async fn load(&self) -> Result<Vec<VideoRecord>, LoadFailure> {
        tokio::time::sleep(self.settings.latency).await;

        let records = self.source.list().await.map_err(|err| {
            feed_warn!("Video source failed: {}", err);
            LoadFailure::from(err)
        })?;
        feed_debug!("Video source returned {} records", records.len());

        if records.is_empty() && self.settings.empty_feed == EmptyFeedPolicy::Fail {
            return Err(LoadFailure::Empty);
        }
        if let Some(id) = first_duplicate_id(&records) {
            return Err(LoadFailure::DuplicateId(id));
        }
        Ok(records)
    }
}
