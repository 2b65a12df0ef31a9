//! OS signal handling.

use tracing::Dispatch;

use crate::lifecycle::Shutdown;

/// Wait for Ctrl+C, then trigger `shutdown`.
///
/// If the handler cannot be installed the error is logged and the process
/// keeps running until killed.
pub async fn shutdown_on_ctrl_c(shutdown: Shutdown, logger: Dispatch) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::dispatcher::with_default(&logger, || {
                tracing::info!("Shutdown signal received");
            });
            shutdown.trigger();
        }
        Err(e) => {
            tracing::dispatcher::with_default(&logger, || {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            });
        }
    }
}
