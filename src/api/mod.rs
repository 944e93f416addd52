//! HTTP layer powered by Axum.

pub mod error;
pub mod handlers;

use crate::core::classifier::ClassificationService;
use crate::core::{ConfigProvider, ZeroShotClassifier};
use crate::utils::error::Result;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub service: ClassificationService,
    pub max_length: usize,
}

impl AppState {
    pub fn new(classifier: Arc<dyn ZeroShotClassifier>, max_length: usize) -> Self {
        Self {
            service: ClassificationService::new(classifier),
            max_length,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(
        config: &C,
        classifier: Arc<dyn ZeroShotClassifier>,
    ) -> Self {
        Self::new(classifier, config.max_length())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/classify", post(handlers::classify_headline))
        .with_state(state)
}

/// 服務 HTTP 請求直到 `shutdown` 完成
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("🌐 Listening on http://{}", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}
