use crate::domain::model::Prediction;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;

/// Zero-shot text classification backend.
///
/// Implementations return every candidate label ranked by descending score.
/// The ranking order is authoritative; callers never re-sort it.
#[async_trait]
pub trait ZeroShotClassifier: Send + Sync {
    async fn classify(&self, text: &str, candidate_labels: &[&str]) -> Result<Vec<Prediction>>;
}

/// Settings source; every provider knows how to check itself.
pub trait ConfigProvider: Validate + Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn model_name(&self) -> &str;
    fn inference_endpoint(&self) -> &str;
    fn api_token(&self) -> Option<&str>;
    fn max_length(&self) -> usize;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
