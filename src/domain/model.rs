use crate::utils::error;
use crate::utils::validation::validate_headline;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 候選標籤，順序固定
pub const CANDIDATE_LABELS: [&str; 3] = ["negative", "neutral", "positive"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            "positive" => Ok(Sentiment::Positive),
            other => Err(format!("unknown sentiment label: {}", other)),
        }
    }
}

/// One ranked entry returned by the zero-shot model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub headline: String,
}

impl ClassificationRequest {
    /// Non-blank, and fewer than `max_length` whitespace-delimited words.
    pub fn validate(&self, max_length: usize) -> error::Result<()> {
        validate_headline("headline", &self.headline, max_length)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_labels_match_candidates() {
        for label in CANDIDATE_LABELS {
            let sentiment: Sentiment = label.parse().unwrap();
            assert_eq!(sentiment.as_str(), label);
        }
        assert!("bullish".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_request_validation_uses_word_count() {
        let request = ClassificationRequest {
            headline: "Ebay stock is soaring after Depop acquisition".to_string(),
        };
        assert!(request.validate(100).is_ok());
        assert!(request.validate(7).is_err());

        let blank = ClassificationRequest {
            headline: "   ".to_string(),
        };
        assert!(blank.validate(100).is_err());
    }

    #[test]
    fn test_response_serializes_lowercase_label() {
        let response = ClassificationResponse {
            sentiment: Sentiment::Positive,
            confidence: 0.91,
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json, serde_json::json!({"sentiment": "positive", "confidence": 0.91}));
    }
}
