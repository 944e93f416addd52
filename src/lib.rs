pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::ServeConfig;

pub use adapters::HuggingFaceClassifier;
pub use api::{router, AppState};
pub use config::toml_config::TomlConfig;
pub use core::classifier::ClassificationService;
pub use utils::error::{Result, SentimentError};
