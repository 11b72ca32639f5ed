use std::sync::Arc;
use std::time::Duration;

use feed_core::LoadFailure;
use feed_engine::{
    EmptyFeedPolicy, FeedLoader, JsonFileVideoSource, LoaderEvent, LoaderHandle, LoaderSettings,
    SourceErrorKind, StaticVideoSource, VideoSource,
};

fn instant_loader(source: Arc<dyn VideoSource>) -> FeedLoader {
    FeedLoader::new(
        source,
        LoaderSettings {
            latency: Duration::ZERO,
            empty_feed: EmptyFeedPolicy::Fail,
        },
    )
}

#[tokio::test]
async fn file_source_reads_json_array() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("feed.json");
    std::fs::write(
        &path,
        r#"[{"id":9,"videoUrl":"v","title":"t","description":"d","userName":"u",
            "userImage":"i","likes":"1","comments":"2","shares":"3","earnings":"4","isPaid":false}]"#,
    )
    .expect("write feed");

    let records = JsonFileVideoSource::new(&path).list().await.expect("list ok");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 9);
    assert_eq!(records[0].shares, "3");
}

#[tokio::test]
async fn file_source_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = JsonFileVideoSource::new(dir.path().join("absent.json"));

    let err = source.list().await.unwrap_err();
    assert_eq!(err.kind, SourceErrorKind::Io);
}

#[test]
fn handle_delivers_embedded_feed_for_mount() {
    let source = StaticVideoSource::embedded().expect("embedded feed");
    let handle = LoaderHandle::new(instant_loader(Arc::new(source)));

    handle.load(1);
    let event = handle
        .recv_timeout(Duration::from_secs(5))
        .expect("loader event");

    let LoaderEvent::Loaded { mount, result } = event;
    assert_eq!(mount, 1);
    let records = result.expect("ready");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "StartupIndia");
    assert!(handle.try_recv().is_none());
}

#[test]
fn handle_delivers_failure_for_empty_feed() {
    let handle = LoaderHandle::new(instant_loader(Arc::new(StaticVideoSource::default())));

    handle.load(2);
    let event = handle
        .recv_timeout(Duration::from_secs(5))
        .expect("loader event");

    assert_eq!(
        event,
        LoaderEvent::Loaded {
            mount: 2,
            result: Err(LoadFailure::Empty),
        }
    );
}

#[test]
fn handle_cancel_suppresses_pending_load() {
    let loader = FeedLoader::new(
        Arc::new(StaticVideoSource::default()),
        LoaderSettings {
            latency: Duration::from_secs(2),
            empty_feed: EmptyFeedPolicy::ShowEmpty,
        },
    );
    let handle = LoaderHandle::new(loader);

    handle.load(1);
    handle.cancel(1);

    assert!(handle.recv_timeout(Duration::from_secs(3)).is_none());
}
