use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub type VideoId = u64;

/// Display data for one feed entry.
///
/// Counters are pre-formatted by the producer ("200K", "1.3K") and are never
/// parsed. `video_url` and `user_image` are passed through unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: VideoId,
    pub video_url: String,
    pub title: String,
    pub description: String,
    pub user_name: String,
    pub user_image: String,
    pub likes: String,
    pub comments: String,
    pub shares: String,
    pub earnings: String,
    pub is_paid: bool,
}

/// Returns the first id that appears more than once, in sequence order.
pub fn first_duplicate_id(records: &[VideoRecord]) -> Option<VideoId> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .map(|record| record.id)
        .find(|id| !seen.insert(*id))
}
