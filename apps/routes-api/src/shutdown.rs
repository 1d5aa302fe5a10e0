use std::time::Duration;

use tokio::signal;

use crate::constants::SERVICE;

/// Resolves on Ctrl+C or SIGTERM. A handler that cannot be installed never
/// fires, so the other signal still triggers shutdown.
pub async fn shutdown_signal(drain_timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        _ = ctrl_c => "SIGINT",
        _ = terminate => "SIGTERM",
    };

    tracing::info!(
        service = SERVICE,
        signal = received,
        drain_timeout_secs = drain_timeout.as_secs(),
        "initiating graceful shutdown"
    );
}
