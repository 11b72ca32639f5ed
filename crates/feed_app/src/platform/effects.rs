use feed_core::{Effect, Msg};
use feed_engine::{FeedLoader, LoaderEvent, LoaderHandle};
use feed_logging::{feed_error, feed_info};

use super::media::MediaBackend;

pub(crate) struct EffectRunner<M: MediaBackend> {
    loader: LoaderHandle,
    media: M,
}

impl<M: MediaBackend> EffectRunner<M> {
    pub(crate) fn new(loader: FeedLoader, media: M) -> Self {
        Self {
            loader: LoaderHandle::new(loader),
            media,
        }
    }

    #[cfg(test)]
    pub(crate) fn media(&self) -> &M {
        &self.media
    }

    pub(crate) fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadFeed { mount } => {
                    feed_info!("LoadFeed mount={}", mount);
                    self.loader.load(mount);
                }
                Effect::CancelLoad { mount } => {
                    feed_info!("CancelLoad mount={}", mount);
                    self.loader.cancel(mount);
                }
                Effect::StartPlayback {
                    video_id,
                    url,
                    muted,
                    looping,
                } => self.media.start(video_id, &url, muted, looping),
                Effect::SetMuted { video_id, muted } => self.media.set_muted(video_id, muted),
                Effect::StopPlayback { video_id } => self.media.stop(video_id),
                Effect::NotifyFailure { reason } => {
                    // The surface renders the notice from the view model.
                    feed_error!("Feed load failed: {}", reason);
                }
            }
        }
    }

    /// Next loader result as a message, without blocking.
    pub(crate) fn poll(&self) -> Option<Msg> {
        self.loader.try_recv().map(to_msg)
    }

    #[cfg(test)]
    pub(crate) fn wait(&self, timeout: std::time::Duration) -> Option<Msg> {
        self.loader.recv_timeout(timeout).map(to_msg)
    }
}

fn to_msg(event: LoaderEvent) -> Msg {
    match event {
        LoaderEvent::Loaded { mount, result } => Msg::FeedLoaded { mount, result },
    }
}
