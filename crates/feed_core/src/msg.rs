#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Feed was mounted. Mounting again discards the current feed and reloads.
    Mounted,
    /// Feed was torn down by the host.
    Unmounted,
    /// Loader resolved the fetch started for `mount`.
    FeedLoaded {
        mount: crate::MountId,
        result: Result<Vec<crate::VideoRecord>, crate::LoadFailure>,
    },
    /// User clicked the media area of a row.
    MuteToggled { video_id: crate::VideoId },
    /// User clicked the follow button of a row.
    FollowToggled { video_id: crate::VideoId },
    /// Render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
