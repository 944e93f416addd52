pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{Result, SentimentError};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, validate_url};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7860;
pub const DEFAULT_MODEL_NAME: &str = "facebook/bart-large-mnli";
pub const DEFAULT_INFERENCE_ENDPOINT: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_MAX_LENGTH: usize = 100;
pub const API_TOKEN_ENV: &str = "HF_API_TOKEN";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "headline-sentiment")]
#[command(about = "HTTP service that classifies the sentiment of news headlines")]
pub struct ServeConfig {
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, default_value = DEFAULT_MODEL_NAME)]
    pub model_name: String,

    #[arg(long, default_value = DEFAULT_INFERENCE_ENDPOINT)]
    pub inference_endpoint: String,

    #[arg(long, help = "Inference API token (falls back to HF_API_TOKEN)")]
    pub api_token: Option<String>,

    #[arg(long, default_value_t = DEFAULT_MAX_LENGTH, help = "Headlines must have fewer words than this")]
    pub max_length: usize,

    #[arg(short, long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ServeConfig {
    /// 沒有 --api-token 時改讀環境變數
    pub fn with_env_token(mut self) -> Self {
        if self.api_token.is_none() {
            self.api_token = std::env::var(API_TOKEN_ENV).ok();
        }
        self
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for ServeConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn inference_endpoint(&self) -> &str {
        &self.inference_endpoint
    }

    fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref().filter(|t| !t.trim().is_empty())
    }

    fn max_length(&self) -> usize {
        self.max_length
    }
}

#[cfg(feature = "cli")]
impl Validate for ServeConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// 所有設定來源共用的檢查
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_non_empty_string("host", config.host())?;

    if config.port() == 0 {
        return Err(SentimentError::InvalidConfigValueError {
            field: "port".to_string(),
            value: "0".to_string(),
            reason: "Port must be between 1 and 65535".to_string(),
        });
    }

    validate_non_empty_string("model_name", config.model_name())?;
    validate_url("inference_endpoint", config.inference_endpoint())?;

    // 至少要能接受一個字的 headline
    validate_positive_number("max_length", config.max_length(), 2)?;

    Ok(())
}
