//! Telemetry data service.
//!
//! Delivers `Option<Payload>` over a channel: `Some` for each sample, `None`
//! when the underlying source disconnects.  The visualization core only sees
//! the channel; which source produces it is a config choice.

pub mod lines;
pub mod system;

use pulse_config::{FeedConfig, FeedSource};
use pulse_core::Payload;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::info;

/// Cloneable start/stop control for a running data service.
#[derive(Debug, Clone)]
pub struct FeedHandle {
    running: Arc<watch::Sender<bool>>,
}

impl FeedHandle {
    /// Resume delivering payloads.
    pub fn start(&self) {
        if !self.running.send_replace(true) {
            info!("Data service started");
        }
    }

    /// Stop delivering payloads until [`start`](Self::start) is called.
    pub fn stop(&self) {
        if self.running.send_replace(false) {
            info!("Data service stopped");
        }
    }
}

/// Spawn the configured source on the current Tokio runtime.
///
/// The service starts running immediately.  The task ends when the receiver
/// is dropped or, for finite sources, after the disconnect is delivered.
pub fn spawn(config: &FeedConfig) -> (FeedHandle, mpsc::Receiver<Option<Payload>>) {
    let (tx, rx) = mpsc::channel(16);
    let (running_tx, running_rx) = watch::channel(true);

    match config.source {
        FeedSource::System => {
            tokio::spawn(system::run(config.clone(), tx, running_rx));
        }
        FeedSource::Stdin => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            tokio::spawn(lines::run(stdin, tx, running_rx));
        }
    }

    info!(source = ?config.source, "Data service spawned");

    let handle = FeedHandle {
        running: Arc::new(running_tx),
    };
    (handle, rx)
}

/// Wait until the service is running.  `false` when the handle is gone.
pub(crate) async fn wait_running(running: &mut watch::Receiver<bool>) -> bool {
    running.wait_for(|r| *r).await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handle_toggles_running() {
        let (tx, rx) = watch::channel(true);
        let handle = FeedHandle { running: Arc::new(tx) };
        handle.stop();
        assert!(!*rx.borrow());
        handle.clone().start();
        assert!(*rx.borrow());
    }

    #[tokio::test]
    async fn wait_running_returns_once_started() {
        let (tx, mut rx) = watch::channel(false);
        let waiter = tokio::spawn(async move { wait_running(&mut rx).await });
        tx.send_replace(true);
        assert!(waiter.await.unwrap());
    }

    #[tokio::test]
    async fn wait_running_fails_when_handle_dropped() {
        let (tx, mut rx) = watch::channel(false);
        drop(tx);
        assert!(!wait_running(&mut rx).await);
    }
}
