pub mod classifier;

pub use crate::domain::model::{
    ClassificationRequest, ClassificationResponse, HealthResponse, Prediction, Sentiment,
    CANDIDATE_LABELS,
};
pub use crate::domain::ports::{ConfigProvider, ZeroShotClassifier};
pub use crate::utils::error::Result;
