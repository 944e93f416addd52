use crate::api::error::ApiError;
use crate::api::AppState;
use crate::core::{ClassificationRequest, ClassificationResponse, HealthResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// POST /classify
pub async fn classify_headline(
    State(state): State<AppState>,
    payload: Result<Json<ClassificationRequest>, JsonRejection>,
) -> Result<Json<ClassificationResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("⚠️ Rejected request body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    // 驗證通過後才記錄內容，避免超長輸入寫進日誌
    if let Err(e) = request.validate(state.max_length) {
        tracing::warn!("⚠️ Rejected headline: {}", e);
        return Err(e.into());
    }

    tracing::info!("📨 Received request to classify -> {}", request.headline);

    let response = state.service.classify(&request.headline).await?;

    tracing::info!(
        "✅ Model Response -> {} with confidence {}",
        response.sentiment,
        response.confidence
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Prediction, Result, ZeroShotClassifier};
    use async_trait::async_trait;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tokio_test::block_on;
    use tracing_subscriber::fmt::MakeWriter;

    struct NeutralClassifier;

    #[async_trait]
    impl ZeroShotClassifier for NeutralClassifier {
        async fn classify(&self, _text: &str, _labels: &[&str]) -> Result<Vec<Prediction>> {
            Ok(vec![Prediction {
                label: "neutral".to_string(),
                score: 0.6,
            }])
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn classify_with_logs(headline: String, max_length: usize) -> (bool, String) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let state = AppState::new(Arc::new(NeutralClassifier), max_length);

        let result = tracing::subscriber::with_default(subscriber, || {
            block_on(classify_headline(
                State(state),
                Ok(Json(ClassificationRequest { headline })),
            ))
        });

        (result.is_ok(), logs.contents())
    }

    #[test]
    fn test_rejected_headline_is_not_logged() {
        let headline = format!("{}secret-tail", "Headline ".repeat(50));
        let (accepted, logs) = classify_with_logs(headline, 10);

        assert!(!accepted);
        assert!(logs.contains("Rejected headline"));
        assert!(!logs.contains("secret-tail"));
        assert!(!logs.contains("Received request"));
    }

    #[test]
    fn test_accepted_headline_is_logged() {
        let (accepted, logs) = classify_with_logs("Stock market rises".to_string(), 10);

        assert!(accepted);
        assert!(logs.contains("Received request to classify -> Stock market rises"));
        assert!(logs.contains("neutral"));
    }

    #[tokio::test]
    async fn test_health_check_returns_ok() {
        let Json(body) = health_check().await;
        assert_eq!(body, HealthResponse::ok());
        assert_eq!(serde_json::to_value(body).unwrap(), serde_json::json!({"status": "ok"}));
    }
}
