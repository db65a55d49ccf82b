use capreq_relay::core::config::AppConfig;
use capreq_relay::state::AppState;
use capreq_relay::{api, setup_logging};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let state = AppState::new(config);

    let app = api::router(state.clone());

    let addr = state.config().bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("capreq-relay listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Deferred follow-ups spawned by in-flight requests outlive the server
    // loop; the process may not exit until they have run to completion.
    let deferred = state.deferred_tasks();
    deferred.close();
    if !deferred.is_empty() {
        info!(
            "Waiting for {} deferred forward(s) to finish",
            deferred.len()
        );
    }
    deferred.wait().await;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
