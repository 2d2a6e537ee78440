use crate::Session;

use std::time::Duration;

use log::{debug, error, warn};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Background task that polls the shared store so other contexts' writes
/// reach this session's subscribers.
pub struct StorageWatcher {
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl StorageWatcher {
    /// Start polling `session` every `interval`. Must be called inside a
    /// tokio runtime.
    pub fn spawn(session: Session, interval: Duration) -> Self {
        let (stop_tx, mut stop_rx) = oneshot::channel();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(e) = session.poll_external() {
                            warn!("Storage poll failed: {e}");
                        }
                    }
                    // Fires on stop() and when the watcher is dropped
                    _ = &mut stop_rx => break,
                }
            }

            debug!("Storage watcher stopped");
        });

        Self { stop_tx, handle }
    }

    /// Stop polling and wait for the task to finish.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(());
        if let Err(e) = self.handle.await {
            error!("Storage watcher task failed: {e}");
        }
    }
}
