//! OS signal handling.

/// Wait for an operator interrupt (Ctrl-C).
pub async fn wait_for_interrupt() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Interrupt received, shutting down");
}
