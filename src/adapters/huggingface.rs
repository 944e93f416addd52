use crate::core::{ConfigProvider, Prediction, Result, ZeroShotClassifier};
use crate::utils::error::SentimentError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters<'a>,
}

#[derive(Debug, Serialize)]
struct InferenceParameters<'a> {
    candidate_labels: &'a [&'a str],
    multi_label: bool,
}

/// The hosted API has answered in both of these shapes over time.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Columns { labels: Vec<String>, scores: Vec<f64> },
    Rows(Vec<Prediction>),
}

impl InferenceResponse {
    fn into_predictions(self) -> Result<Vec<Prediction>> {
        match self {
            InferenceResponse::Columns { labels, scores } => {
                if labels.len() != scores.len() {
                    return Err(SentimentError::InferenceError {
                        message: format!(
                            "response has {} labels but {} scores",
                            labels.len(),
                            scores.len()
                        ),
                    });
                }
                Ok(labels
                    .into_iter()
                    .zip(scores)
                    .map(|(label, score)| Prediction { label, score })
                    .collect())
            }
            InferenceResponse::Rows(predictions) => Ok(predictions),
        }
    }
}

/// Zero-shot classifier backed by the Hugging Face inference HTTP API.
pub struct HuggingFaceClassifier {
    client: Client,
    model_url: String,
    model_name: String,
    api_token: Option<String>,
}

impl HuggingFaceClassifier {
    pub fn new(endpoint: &str, model_name: &str, api_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            model_url: format!("{}/{}", endpoint.trim_end_matches('/'), model_name),
            model_name: model_name.to_string(),
            api_token,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(
            config.inference_endpoint(),
            config.model_name(),
            config.api_token().map(str::to_string),
        )
    }

    pub fn model_url(&self) -> &str {
        &self.model_url
    }
}

#[async_trait]
impl ZeroShotClassifier for HuggingFaceClassifier {
    async fn classify(&self, text: &str, candidate_labels: &[&str]) -> Result<Vec<Prediction>> {
        let body = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                candidate_labels,
                multi_label: false,
            },
        };

        tracing::debug!("Calling model '{}' at {}", self.model_name, self.model_url);
        let mut request = self.client.post(&self.model_url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Inference API response status: {}", status);

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SentimentError::InferenceError {
                message: format!("inference API returned {}: {}", status, detail),
            });
        }

        let bytes = response.bytes().await?;
        let parsed: InferenceResponse = serde_json::from_slice(&bytes)?;
        parsed.into_predictions()
    }
}
