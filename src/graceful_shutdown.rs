use tokio::signal;
use tracing::warn;

/// Resolves when the process receives Ctrl+C or, on unix, SIGTERM. The
/// caller races this against the server future to drive shutdown.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate())
            .expect("Failed to listen for SIGTERM")
            .recv()
            .await;
        "SIGTERM"
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&str>();

    let received = tokio::select! {
        res = signal::ctrl_c() => {
            res.expect("Failed to listen for Ctrl+C");
            "Ctrl+C"
        }
        name = terminate => name,
    };

    warn!("{} received, initiating shutdown...", received);
}
