use crate::app::handlers::AppState;
use crate::app::routes::create_router;
use crate::core::service::LuckyService;
use crate::domain::ports::ConfigProvider;
use crate::utils::validation::validate_socket_addr;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Binds the configured address and serves until `shutdown` resolves.
pub async fn serve<C, F>(config: &C, shutdown: F) -> anyhow::Result<()>
where
    C: ConfigProvider,
    F: Future<Output = ()> + Send + 'static,
{
    let addr = validate_socket_addr("bind_address", config.bind_address())?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind HTTP listener to {}: {}", addr, e))?;

    tracing::info!("🚀 HTTP server listening on {}", listener.local_addr()?);

    serve_listener(
        listener,
        Arc::new(LuckyService::new()),
        Duration::from_secs(config.request_timeout_seconds()),
        shutdown,
    )
    .await
}

pub async fn serve_listener<F>(
    listener: TcpListener,
    state: AppState,
    request_timeout: Duration,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = create_router(state, request_timeout);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn ctrl_c_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
