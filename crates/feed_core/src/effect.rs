#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadFeed {
        mount: crate::MountId,
    },
    CancelLoad {
        mount: crate::MountId,
    },
    StartPlayback {
        video_id: crate::VideoId,
        url: String,
        muted: bool,
        looping: bool,
    },
    SetMuted {
        video_id: crate::VideoId,
        muted: bool,
    },
    StopPlayback {
        video_id: crate::VideoId,
    },
    NotifyFailure {
        reason: String,
    },
}
