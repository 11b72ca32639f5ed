use std::collections::BTreeMap;

use crate::view_model::{build_view, FeedViewModel};
use crate::{LoadFailure, VideoId, VideoRecord};

pub type MountId = u64;

/// Tri-state result of the feed fetch for one mount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedLoadState {
    #[default]
    Loading,
    Ready(Vec<VideoRecord>),
    Failed(LoadFailure),
}

impl FeedLoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedLoadState::Loading)
    }

    pub fn records(&self) -> &[VideoRecord] {
        match self {
            FeedLoadState::Ready(records) => records,
            FeedLoadState::Loading | FeedLoadState::Failed(_) => &[],
        }
    }
}

/// Per-row UI toggles. Never shared between rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionState {
    pub muted: bool,
    pub followed: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            muted: true,
            followed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Mount {
    pub(crate) id: MountId,
    pub(crate) load: FeedLoadState,
    pub(crate) rows: BTreeMap<VideoId, InteractionState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedState {
    mount: Option<Mount>,
    last_mount_id: MountId,
    dirty: bool,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> FeedViewModel {
        build_view(self.mount.as_ref(), self.dirty)
    }

    pub fn mount_id(&self) -> Option<MountId> {
        self.mount.as_ref().map(|mount| mount.id)
    }

    /// Load state of the current mount, `None` while unmounted.
    pub fn load_state(&self) -> Option<&FeedLoadState> {
        self.mount.as_ref().map(|mount| &mount.load)
    }

    pub fn interaction(&self, video_id: VideoId) -> Option<InteractionState> {
        self.mount
            .as_ref()
            .and_then(|mount| mount.rows.get(&video_id).copied())
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Starts a fresh mount in `Loading` and returns its id.
    pub(crate) fn begin_mount(&mut self) -> MountId {
        self.last_mount_id += 1;
        self.mount = Some(Mount {
            id: self.last_mount_id,
            load: FeedLoadState::Loading,
            rows: BTreeMap::new(),
        });
        self.mark_dirty();
        self.last_mount_id
    }

    pub(crate) fn take_mount(&mut self) -> Option<Mount> {
        let mount = self.mount.take();
        if mount.is_some() {
            self.mark_dirty();
        }
        mount
    }

    /// The current mount, only while it is still waiting on `mount_id`'s load.
    pub(crate) fn pending_mount_mut(&mut self, mount_id: MountId) -> Option<&mut Mount> {
        self.mount
            .as_mut()
            .filter(|mount| mount.id == mount_id && mount.load.is_loading())
    }

    pub(crate) fn row_mut(&mut self, video_id: VideoId) -> Option<&mut InteractionState> {
        self.mount
            .as_mut()
            .and_then(|mount| mount.rows.get_mut(&video_id))
    }
}
