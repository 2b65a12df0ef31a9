//! Shutdown coordination for the Prober loop and the Responder server.

use tokio::sync::broadcast;

/// Coordinator for stopping long-running components.
///
/// Both roles run forever by default; tests and the Ctrl+C handler stop them
/// by triggering this channel.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    ///
    /// A receiver subscribed after `trigger` will not observe it.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of components still listening.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve once the signal fires or every sender is gone.
pub async fn wait(mut rx: broadcast::Receiver<()>) {
    // Lagged still means a signal was sent; Closed means nobody can send one.
    let _ = rx.recv().await;
}
