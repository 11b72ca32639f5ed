//! Feed core: pure state machine for the video feed and its view-model helpers.
mod effect;
mod error;
mod msg;
mod nav;
mod record;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::LoadFailure;
pub use msg::Msg;
pub use nav::NavItem;
pub use record::{first_duplicate_id, VideoId, VideoRecord};
pub use state::{FeedLoadState, FeedState, InteractionState, MountId};
pub use update::update;
pub use view_model::{
    CounterKind, CounterView, FeedBody, FeedViewModel, VideoRowView, DESCRIPTION_MAX_LINES,
    FAILURE_NOTICE, LOADING_PLACEHOLDER,
};
