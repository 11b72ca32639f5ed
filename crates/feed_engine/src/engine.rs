use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use feed_core::MountId;
use feed_logging::{feed_debug, feed_error};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{FeedLoader, LoaderEvent};

enum LoaderCommand {
    Load { mount: MountId },
    Cancel { mount: MountId },
}

/// Runs feed loads on a background runtime so the caller's loop never blocks.
pub struct LoaderHandle {
    cmd_tx: mpsc::Sender<LoaderCommand>,
    event_rx: mpsc::Receiver<LoaderEvent>,
}

impl LoaderHandle {
    pub fn new(loader: FeedLoader) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let loader = Arc::new(loader);

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    feed_error!("Failed to start loader runtime: {}", err);
                    return;
                }
            };
            let mut pending: HashMap<MountId, (CancellationToken, JoinHandle<()>)> =
                HashMap::new();

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    LoaderCommand::Load { mount } => {
                        pending.retain(|_, (_, task)| !task.is_finished());
                        let token = CancellationToken::new();
                        let task = runtime.spawn(run_load(
                            loader.clone(),
                            mount,
                            token.clone(),
                            event_tx.clone(),
                        ));
                        pending.insert(mount, (token, task));
                    }
                    LoaderCommand::Cancel { mount } => {
                        if let Some((token, _)) = pending.remove(&mount) {
                            feed_debug!("Cancelling load for mount {}", mount);
                            token.cancel();
                        }
                    }
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn load(&self, mount: MountId) {
        let _ = self.cmd_tx.send(LoaderCommand::Load { mount });
    }

    pub fn cancel(&self, mount: MountId) {
        let _ = self.cmd_tx.send(LoaderCommand::Cancel { mount });
    }

    pub fn try_recv(&self) -> Option<LoaderEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<LoaderEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn run_load(
    loader: Arc<FeedLoader>,
    mount: MountId,
    token: CancellationToken,
    event_tx: mpsc::Sender<LoaderEvent>,
) {
    if let Some(event) = load_unless_cancelled(&loader, mount, &token).await {
        let _ = event_tx.send(event);
    }
}

/// Resolves to the load event for `mount`, or `None` once `token` is cancelled.
pub async fn load_unless_cancelled(
    loader: &FeedLoader,
    mount: MountId,
    token: &CancellationToken,
) -> Option<LoaderEvent> {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            feed_debug!("Load for mount {} cancelled", mount);
            None
        }
        result = loader.load() => Some(LoaderEvent::Loaded { mount, result }),
    }
}
