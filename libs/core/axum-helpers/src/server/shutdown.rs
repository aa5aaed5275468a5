use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{error, info};

/// Shutdown coordinator that manages graceful application shutdown.
///
/// Waits for SIGINT/SIGTERM, flips a shared flag and broadcasts to every
/// subscriber exactly once.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: broadcast::Sender<()>,
    shutdown_initiated: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    /// Create a coordinator and a receiver for its shutdown broadcast.
    pub fn new() -> (Self, broadcast::Receiver<()>) {
        let (tx, rx) = broadcast::channel(1);
        let coordinator = Self {
            tx,
            shutdown_initiated: Arc::new(AtomicBool::new(false)),
        };
        (coordinator, rx)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown_initiated.load(Ordering::Relaxed)
    }

    /// Initiate shutdown and notify all subscribers. Later calls are no-ops.
    pub fn shutdown(&self) {
        if self
            .shutdown_initiated
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            info!("Initiating graceful shutdown");
            let _ = self.tx.send(());
        }
    }

    /// Resolve once a termination signal arrives or `shutdown` is called.
    pub async fn wait_for_signal(&self) {
        let mut rx = self.subscribe();
        if self.is_shutting_down() {
            return;
        }

        tokio::select! {
            _ = shutdown_signal() => self.shutdown(),
            _ = rx.recv() => {}
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new().0
    }
}

/// Resolve on Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed the error is logged and that signal is
/// ignored, so the server keeps running rather than exiting immediately.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down gracefully"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received SIGTERM, shutting down gracefully");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_notifies_subscribers_once() {
        let (coordinator, mut rx) = ShutdownCoordinator::new();
        assert!(!coordinator.is_shutting_down());

        coordinator.shutdown();
        coordinator.shutdown();

        assert!(coordinator.is_shutting_down());
        assert!(rx.recv().await.is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_wait_for_signal_returns_after_manual_shutdown() {
        let coordinator = ShutdownCoordinator::default();
        let waiter = coordinator.clone();
        let handle = tokio::spawn(async move { waiter.wait_for_signal().await });

        tokio::time::sleep(Duration::from_millis(10)).await;
        coordinator.shutdown();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();
    }
}
