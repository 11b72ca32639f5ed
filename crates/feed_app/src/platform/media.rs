use std::collections::BTreeMap;

use feed_core::VideoId;
use feed_logging::{feed_info, feed_warn};

/// Host media playback. Every call addresses exactly one row's player.
pub(crate) trait MediaBackend {
    fn start(&mut self, video_id: VideoId, url: &str, muted: bool, looping: bool);
    fn set_muted(&mut self, video_id: VideoId, muted: bool);
    fn stop(&mut self, video_id: VideoId);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlayerHandle {
    pub url: String,
    pub muted: bool,
    pub looping: bool,
}

/// Tracks one player handle per row and logs instead of decoding media.
#[derive(Debug, Default)]
pub(crate) struct HeadlessMedia {
    players: BTreeMap<VideoId, PlayerHandle>,
}

impl HeadlessMedia {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn player(&self, video_id: VideoId) -> Option<&PlayerHandle> {
        self.players.get(&video_id)
    }

    #[cfg(test)]
    pub(crate) fn player_count(&self) -> usize {
        self.players.len()
    }
}

impl MediaBackend for HeadlessMedia {
    fn start(&mut self, video_id: VideoId, url: &str, muted: bool, looping: bool) {
        feed_info!(
            "Playback start video={} muted={} loop={} url={}",
            video_id,
            muted,
            looping,
            url
        );
        self.players.insert(
            video_id,
            PlayerHandle {
                url: url.to_string(),
                muted,
                looping,
            },
        );
    }

    fn set_muted(&mut self, video_id: VideoId, muted: bool) {
        match self.players.get_mut(&video_id) {
            Some(player) => {
                feed_info!("Playback video={} muted={}", video_id, muted);
                player.muted = muted;
            }
            None => feed_warn!("Mute for video {} without a player", video_id),
        }
    }

    fn stop(&mut self, video_id: VideoId) {
        if self.players.remove(&video_id).is_some() {
            feed_info!("Playback stop video={}", video_id);
        }
    }
}
