//! Shutdown coordination for the server.
//!
//! # Responsibilities
//! - Fan a single stop signal out to every long-running task
//! - Bound how long in-flight requests may drain after the signal

use std::future::Future;
use std::time::Duration;

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Tasks still listening for the signal.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Drive `task` to completion, allowing at most `grace` once the signal fires.
    ///
    /// Returns `None` when the grace period ran out first.
    pub async fn drain<F: Future>(&self, task: F, grace: Duration) -> Option<F::Output> {
        let mut stopped = self.subscribe();
        tokio::pin!(task);

        tokio::select! {
            output = &mut task => return Some(output),
            _ = stopped.recv() => {}
        }

        match tokio::time::timeout(grace, task).await {
            Ok(output) => Some(output),
            Err(_) => {
                tracing::warn!(grace_secs = grace.as_secs(), "Grace period elapsed, dropping open connections");
                None
            }
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
