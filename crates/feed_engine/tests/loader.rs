use std::sync::Arc;
use std::time::Duration;

use feed_core::{LoadFailure, VideoRecord};
use feed_engine::{
    load_unless_cancelled, CancellationToken, EmptyFeedPolicy, FeedLoader, LoaderEvent,
    LoaderSettings, SourceError, SourceErrorKind, StaticVideoSource, VideoSource,
};
use pretty_assertions::assert_eq;

fn record(id: u64) -> VideoRecord {
    VideoRecord {
        id,
        video_url: format!("https://cdn.example.com/{id}.mp4"),
        title: format!("clip{id}"),
        description: String::new(),
        user_name: format!("user{id}"),
        user_image: String::new(),
        likes: "10".to_string(),
        comments: "2".to_string(),
        shares: "1".to_string(),
        earnings: "0".to_string(),
        is_paid: false,
    }
}

fn loader_for(records: Vec<VideoRecord>, empty_feed: EmptyFeedPolicy) -> FeedLoader {
    FeedLoader::new(
        Arc::new(StaticVideoSource::from_records(records)),
        LoaderSettings {
            empty_feed,
            ..LoaderSettings::default()
        },
    )
}

struct BrokenSource;

#[async_trait::async_trait]
impl VideoSource for BrokenSource {
    async fn list(&self) -> Result<Vec<VideoRecord>, SourceError> {
        Err(SourceError {
            kind: SourceErrorKind::Network,
            message: "connection reset".to_string(),
        })
    }
}

#[tokio::test(start_paused = true)]
async fn non_empty_source_resolves_in_order_after_latency() {
    let records = vec![record(3), record(1), record(2)];
    let loader = loader_for(records.clone(), EmptyFeedPolicy::Fail);

    let load = loader.load();
    tokio::pin!(load);
    assert!(tokio::time::timeout(Duration::from_millis(999), &mut load)
        .await
        .is_err());

    assert_eq!(load.await, Ok(records));
}

#[tokio::test(start_paused = true)]
async fn default_latency_is_one_second() {
    let loader = loader_for(vec![record(1)], EmptyFeedPolicy::Fail);
    assert_eq!(loader.settings().latency, Duration::from_millis(1000));

    let start = tokio::time::Instant::now();
    loader.load().await.expect("load ok");
    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn empty_source_fails_by_default() {
    let loader = loader_for(Vec::new(), EmptyFeedPolicy::Fail);
    assert_eq!(loader.load().await, Err(LoadFailure::Empty));
}

#[tokio::test(start_paused = true)]
async fn empty_source_can_resolve_to_empty_feed() {
    let loader = loader_for(Vec::new(), EmptyFeedPolicy::ShowEmpty);
    assert_eq!(loader.load().await, Ok(Vec::new()));
}

#[tokio::test(start_paused = true)]
async fn duplicate_ids_are_rejected() {
    let loader = loader_for(vec![record(1), record(2), record(2)], EmptyFeedPolicy::Fail);
    assert_eq!(loader.load().await, Err(LoadFailure::DuplicateId(2)));
}

#[tokio::test(start_paused = true)]
async fn source_errors_become_load_failures() {
    let loader = FeedLoader::new(Arc::new(BrokenSource), LoaderSettings::default());
    assert_eq!(
        loader.load().await,
        Err(LoadFailure::Source(
            "network error: connection reset".to_string()
        ))
    );
}

#[tokio::test(start_paused = true)]
async fn load_emits_event_tagged_with_mount() {
    let loader = loader_for(vec![record(1)], EmptyFeedPolicy::Fail);
    let token = CancellationToken::new();

    let event = load_unless_cancelled(&loader, 4, &token).await;

    assert_eq!(
        event,
        Some(LoaderEvent::Loaded {
            mount: 4,
            result: Ok(vec![record(1)]),
        })
    );
}

#[tokio::test(start_paused = true)]
async fn cancelled_load_emits_nothing() {
    let loader = loader_for(vec![record(1)], EmptyFeedPolicy::Fail);
    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        canceller.cancel();
    });

    assert_eq!(load_unless_cancelled(&loader, 1, &token).await, None);
}

#[tokio::test(start_paused = true)]
async fn already_cancelled_load_never_queries_source() {
    let loader = FeedLoader::new(Arc::new(BrokenSource), LoaderSettings::default());
    let token = CancellationToken::new();
    token.cancel();

    assert_eq!(load_unless_cancelled(&loader, 1, &token).await, None);
}
