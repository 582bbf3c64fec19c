use tokio::sync::watch;

/// Raised once; workers poll it between requests.
pub type ShutdownSender = watch::Sender<bool>;
pub type ShutdownReceiver = watch::Receiver<bool>;

#[must_use]
pub fn shutdown_channel() -> (ShutdownSender, ShutdownReceiver) {
    watch::channel(false)
}

#[must_use]
pub fn is_shutdown(shutdown_rx: &ShutdownReceiver) -> bool {
    *shutdown_rx.borrow()
}

/// Resolves once the flag is raised or every sender is gone.
pub async fn wait_for_shutdown(shutdown_rx: &mut ShutdownReceiver) {
    while !is_shutdown(shutdown_rx) {
        if shutdown_rx.changed().await.is_err() {
            break;
        }
    }
}
