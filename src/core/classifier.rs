use crate::core::{
    ClassificationResponse, Prediction, Result, Sentiment, ZeroShotClassifier, CANDIDATE_LABELS,
};
use crate::utils::error::SentimentError;
use crate::utils::validation::word_count;
use std::sync::Arc;

/// Picks the top-ranked sentiment for a headline.
///
/// Holds the one shared classifier handle built at startup. Blank headlines
/// are rejected with [`SentimentError::ValidationError`] before the classifier
/// is called. Every other call makes exactly one inference attempt; any
/// failure below this layer surfaces as [`SentimentError::ClassificationFailed`]
/// after being logged with detail.
#[derive(Clone)]
pub struct ClassificationService {
    classifier: Arc<dyn ZeroShotClassifier>,
}

impl ClassificationService {
    pub fn new(classifier: Arc<dyn ZeroShotClassifier>) -> Self {
        Self { classifier }
    }

    pub async fn classify(&self, headline: &str) -> Result<ClassificationResponse> {
        if word_count(headline) == 0 {
            return Err(SentimentError::ValidationError {
                field: "headline".to_string(),
                message: "headline cannot be empty or whitespace-only".to_string(),
            });
        }

        tracing::debug!("Invoking zero-shot classifier with labels {:?}", CANDIDATE_LABELS);

        let predictions = match self.classifier.classify(headline, &CANDIDATE_LABELS).await {
            Ok(predictions) => predictions,
            Err(e) => {
                tracing::error!("❌ Error during classification: {}", e);
                return Err(SentimentError::ClassificationFailed);
            }
        };

        match top_prediction(&predictions) {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::error!("❌ Unusable classifier output: {}", e);
                Err(SentimentError::ClassificationFailed)
            }
        }
    }
}

/// 取排名第一的結果，不重新排序
fn top_prediction(predictions: &[Prediction]) -> Result<ClassificationResponse> {
    let top = predictions
        .first()
        .ok_or_else(|| SentimentError::InferenceError {
            message: "classifier returned no predictions".to_string(),
        })?;

    let sentiment: Sentiment = top
        .label
        .parse()
        .map_err(|message| SentimentError::InferenceError { message })?;

    if !top.score.is_finite() || !(0.0..=1.0).contains(&top.score) {
        return Err(SentimentError::InferenceError {
            message: format!("score {} for '{}' is outside [0, 1]", top.score, top.label),
        });
    }

    Ok(ClassificationResponse {
        sentiment,
        confidence: top.score,
    })
}
