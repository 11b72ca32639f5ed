use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use feed_core::{update, FeedState, Msg};
use feed_engine::FeedLoader;
use feed_logging::{feed_info, feed_warn};
use log::LevelFilter;

use super::config::{load_or_default, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::media::{HeadlessMedia, MediaBackend};
use super::ui;
use super::ui::input::{parse_line, InputCommand};

/// Interval at which the loop wakes to pick up loader results.
const TICK: Duration = Duration::from_millis(50);

enum HostEvent {
    Input(InputCommand),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let (config, config_err) = load_or_default(&config_path);

    feed_logging::initialize(config.log, LevelFilter::Info, &config.log_file);
    if let Some(err) = config_err {
        feed_warn!("Using default configuration: {}", err);
    }
    feed_info!("Starting feed with {:?}", config);

    let loader = FeedLoader::new(config.build_source()?, config.loader_settings());
    let mut app = FeedApp::new(loader, HeadlessMedia::new(), io::stdout(), true);

    let (event_tx, event_rx) = mpsc::channel::<HostEvent>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(HostEvent::Input(parse_line(&line))).is_err() {
                return;
            }
        }
        let _ = event_tx.send(HostEvent::InputClosed);
    });

    app.dispatch_msg(Msg::Mounted)?;
    loop {
        match event_rx.recv_timeout(TICK) {
            Ok(HostEvent::Input(InputCommand::Dispatch(msg))) => app.dispatch_msg(msg)?,
            Ok(HostEvent::Input(InputCommand::Help)) => eprintln!("{}", ui::input::HELP),
            Ok(HostEvent::Input(InputCommand::Quit)) | Ok(HostEvent::InputClosed) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => app.dispatch_msg(Msg::Tick)?,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
        app.process_loader_results()?;
    }

    app.dispatch_msg(Msg::Unmounted)?;
    feed_info!("Feed closed");
    Ok(())
}

struct FeedApp<M: MediaBackend, W: Write> {
    state: FeedState,
    runner: EffectRunner<M>,
    surface: ui::surface::TerminalSurface<W>,
}

impl<M: MediaBackend, W: Write> FeedApp<M, W> {
    fn new(loader: FeedLoader, media: M, out: W, clear_screen: bool) -> Self {
        Self {
            state: FeedState::new(),
            runner: EffectRunner::new(loader, media),
            surface: ui::surface::TerminalSurface::new(out, clear_screen),
        }
    }

    fn process_loader_results(&mut self) -> io::Result<()> {
        while let Some(msg) = self.runner.poll() {
            self.dispatch_msg(msg)?;
        }
        Ok(())
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = was_dirty.then(|| state.view());
        self.state = state;

        self.runner.enqueue(effects);
        match view {
            Some(view) => self.surface.apply(&ui::render::render(&view)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use feed_engine::{EmptyFeedPolicy, LoaderSettings, StaticVideoSource};

    use super::*;

    fn app_with(source: StaticVideoSource) -> FeedApp<HeadlessMedia, Vec<u8>> {
        let loader = FeedLoader::new(
            Arc::new(source),
            LoaderSettings {
                latency: Duration::ZERO,
                empty_feed: EmptyFeedPolicy::Fail,
            },
        );
        FeedApp::new(loader, HeadlessMedia::new(), Vec::new(), false)
    }

    fn mount_and_settle(app: &mut FeedApp<HeadlessMedia, Vec<u8>>) {
        app.dispatch_msg(Msg::Mounted).expect("render");
        let msg = app
            .runner
            .wait(Duration::from_secs(5))
            .expect("loader result");
        app.dispatch_msg(msg).expect("render");
    }

    fn output(app: FeedApp<HeadlessMedia, Vec<u8>>) -> String {
        String::from_utf8(app.surface.into_inner()).expect("utf8")
    }

    #[test]
    fn embedded_feed_renders_one_row_and_plays_it_muted() {
        let mut app = app_with(StaticVideoSource::embedded().expect("embedded"));
        mount_and_settle(&mut app);

        let player = app.runner.media().player(1).expect("player for row 1");
        assert!(player.muted);
        assert!(player.looping);

        app.dispatch_msg(Msg::MuteToggled { video_id: 1 })
            .expect("render");
        assert!(!app.runner.media().player(1).expect("player").muted);

        app.dispatch_msg(Msg::FollowToggled { video_id: 1 })
            .expect("render");

        let out = output(app);
        assert!(out.starts_with("Loading...\n"));
        assert!(out.contains("#StartupIndia"));
        assert!(out.contains("[Follow]"));
        assert!(out.contains("(sound on, autoplay, loop)"));
        assert!(out.contains("[Following]"));
        assert!(out.contains("❤️ 200K"));
    }

    #[test]
    fn empty_feed_renders_one_notice() {
        let mut app = app_with(StaticVideoSource::default());
        mount_and_settle(&mut app);

        assert_eq!(app.runner.media().player_count(), 0);
        let out = output(app);
        assert_eq!(
            out.matches("Failed to load videos: no videos available").count(),
            1
        );
        assert!(!out.contains("[1] ▶"));
    }

    #[test]
    fn unmount_stops_playback() {
        let mut app = app_with(StaticVideoSource::embedded().expect("embedded"));
        mount_and_settle(&mut app);

        app.dispatch_msg(Msg::Unmounted).expect("render");

        assert_eq!(app.runner.media().player_count(), 0);
    }

    #[test]
    fn toggles_without_changes_do_not_rerender() {
        let mut app = app_with(StaticVideoSource::embedded().expect("embedded"));
        mount_and_settle(&mut app);
        let before = app.surface.get_ref().len();

        app.dispatch_msg(Msg::Tick).expect("render");
        app.dispatch_msg(Msg::FollowToggled { video_id: 99 })
            .expect("render");

        assert_eq!(app.surface.get_ref().len(), before);
    }
}
