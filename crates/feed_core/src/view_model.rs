use crate::state::Mount;
use crate::{FeedLoadState, NavItem, VideoId};

pub const LOADING_PLACEHOLDER: &str = "Loading...";
pub const FAILURE_NOTICE: &str = "Failed to load videos";
/// Descriptions are clamped to this many lines by the surface.
pub const DESCRIPTION_MAX_LINES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedViewModel {
    pub body: FeedBody,
    pub nav: Vec<NavItem>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedBody {
    Unmounted,
    Loading { placeholder: String },
    Failed { notice: String },
    Rows(Vec<VideoRowView>),
}

impl FeedBody {
    pub fn rows(&self) -> &[VideoRowView] {
        match self {
            FeedBody::Rows(rows) => rows,
            FeedBody::Unmounted | FeedBody::Loading { .. } | FeedBody::Failed { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRowView {
    pub video_id: VideoId,
    pub video_url: String,
    pub caption: String,
    pub user_name: String,
    pub user_image: String,
    pub description: String,
    pub follow_label: &'static str,
    pub followed: bool,
    pub muted: bool,
    pub autoplay: bool,
    pub looping: bool,
    pub is_paid: bool,
    pub counters: Vec<CounterView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    Likes,
    Comments,
    Shares,
    Earnings,
}

impl CounterKind {
    pub fn glyph(self) -> &'static str {
        match self {
            CounterKind::Likes => "❤️",
            CounterKind::Comments => "💬",
            CounterKind::Shares => "🔁",
            CounterKind::Earnings => "💰",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub kind: CounterKind,
    pub text: String,
}

pub(crate) fn build_view(mount: Option<&Mount>, dirty: bool) -> FeedViewModel {
    let body = match mount {
        None => FeedBody::Unmounted,
        Some(mount) => match &mount.load {
            FeedLoadState::Loading => FeedBody::Loading {
                placeholder: LOADING_PLACEHOLDER.to_string(),
            },
            FeedLoadState::Failed(failure) => FeedBody::Failed {
                notice: format!("{FAILURE_NOTICE}: {failure}"),
            },
            FeedLoadState::Ready(records) => FeedBody::Rows(
                records
                    .iter()
                    .map(|record| {
                        let interaction = mount.rows.get(&record.id).copied().unwrap_or_default();
                        VideoRowView {
                            video_id: record.id,
                            video_url: record.video_url.clone(),
                            caption: format!("#{}", record.title),
                            user_name: record.user_name.clone(),
                            user_image: record.user_image.clone(),
                            description: record.description.clone(),
                            follow_label: if interaction.followed {
                                "Following"
                            } else {
                                "Follow"
                            },
                            followed: interaction.followed,
                            muted: interaction.muted,
                            autoplay: true,
                            looping: true,
                            is_paid: record.is_paid,
                            counters: vec![
                                CounterView {
                                    kind: CounterKind::Likes,
                                    text: record.likes.clone(),
                                },
                                CounterView {
                                    kind: CounterKind::Comments,
                                    text: record.comments.clone(),
                                },
                                CounterView {
                                    kind: CounterKind::Shares,
                                    text: record.shares.clone(),
                                },
                                CounterView {
                                    kind: CounterKind::Earnings,
                                    text: record.earnings.clone(),
                                },
                            ],
                        }
                    })
                    .collect(),
            ),
        },
    };

    FeedViewModel {
        body,
        nav: NavItem::ALL.to_vec(),
        dirty,
    }
}
