use tokio::sync::broadcast;

/// Scope of a mounted view. Work tied to the view stops when the lifetime is
/// ended or dropped.
pub struct ViewLifetime {
    end_tx: broadcast::Sender<()>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        let (end_tx, _) = broadcast::channel(1);
        Self { end_tx }
    }

    /// Get a guard to hand to work running on behalf of the view
    pub fn guard(&self) -> LifetimeGuard {
        LifetimeGuard {
            end_rx: self.end_tx.subscribe(),
        }
    }

    /// Unmount: every guard's `ended()` resolves
    pub fn end(&self) {
        let _ = self.end_tx.send(());
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LifetimeGuard {
    end_rx: broadcast::Receiver<()>,
}

impl LifetimeGuard {
    /// Wait until the view is unmounted
    pub async fn ended(&mut self) {
        // Err means the lifetime was dropped, which also ends it
        let _ = self.end_rx.recv().await;
    }
}
