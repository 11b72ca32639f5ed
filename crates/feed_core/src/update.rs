use feed_logging::{feed_debug, feed_info, feed_warn};

use crate::state::Mount;
use crate::{
    first_duplicate_id, Effect, FeedLoadState, FeedState, InteractionState, LoadFailure, Msg,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FeedState, msg: Msg) -> (FeedState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            // Remounting doubles as retry: the previous mount is torn down first so
            // its pending result can never land on the new one.
            let mut effects = state.take_mount().map(teardown).unwrap_or_default();
            let mount = state.begin_mount();
            feed_info!("Feed mounted (mount {})", mount);
            effects.push(Effect::LoadFeed { mount });
            effects
        }
        Msg::Unmounted => match state.take_mount() {
            Some(mount) => {
                feed_info!("Feed unmounted (mount {})", mount.id);
                teardown(mount)
            }
            None => Vec::new(),
        },
        Msg::FeedLoaded { mount, result } => {
            let Some(pending) = state.pending_mount_mut(mount) else {
                feed_warn!("Ignoring feed result for inactive mount {}", mount);
                return (state, Vec::new());
            };
            let result = result.and_then(|records| match first_duplicate_id(&records) {
                Some(id) => Err(LoadFailure::DuplicateId(id)),
                None => Ok(records),
            });
            let effects = match result {
                Ok(records) => {
                    feed_info!("Feed ready with {} videos (mount {})", records.len(), mount);
                    let defaults = InteractionState::default();
                    pending.rows = records.iter().map(|r| (r.id, defaults)).collect();
                    let effects = records
                        .iter()
                        .map(|record| Effect::StartPlayback {
                            video_id: record.id,
                            url: record.video_url.clone(),
                            muted: defaults.muted,
                            looping: true,
                        })
                        .collect();
                    pending.load = FeedLoadState::Ready(records);
                    effects
                }
                Err(failure) => {
                    feed_warn!("Feed failed to load (mount {}): {}", mount, failure);
                    let reason = failure.to_string();
                    pending.load = FeedLoadState::Failed(failure);
                    vec![Effect::NotifyFailure { reason }]
                }
            };
            state.mark_dirty();
            effects
        }
        Msg::MuteToggled { video_id } => match state.row_mut(video_id) {
            Some(row) => {
                row.muted = !row.muted;
                let muted = row.muted;
                state.mark_dirty();
                feed_debug!("Video {} muted={}", video_id, muted);
                vec![Effect::SetMuted { video_id, muted }]
            }
            None => Vec::new(),
        },
        Msg::FollowToggled { video_id } => {
            if let Some(row) = state.row_mut(video_id) {
                row.followed = !row.followed;
                feed_debug!("Video {} followed={}", video_id, row.followed);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn teardown(mount: Mount) -> Vec<Effect> {
    match mount.load {
        FeedLoadState::Loading => vec![Effect::CancelLoad { mount: mount.id }],
        FeedLoadState::Ready(records) => records
            .iter()
            .map(|record| Effect::StopPlayback {
                video_id: record.id,
            })
            .collect(),
        FeedLoadState::Failed(_) => Vec::new(),
    }
}
