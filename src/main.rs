use clap::Parser;
use headline_sentiment::api::{self, AppState};
use headline_sentiment::core::ConfigProvider;
use headline_sentiment::utils::error::ErrorSeverity;
use headline_sentiment::utils::logger;
use headline_sentiment::utils::validation::Validate;
use headline_sentiment::{HuggingFaceClassifier, Result, ServeConfig, TomlConfig};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let cli = ServeConfig::parse().with_env_token();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("🚀 Starting headline-sentiment server");

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: ServeConfig) -> Result<()> {
    // 有指定設定檔時以檔案為準
    let config: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            Box::new(TomlConfig::from_file(path)?)
        }
        None => Box::new(cli.clone()),
    };

    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    let classifier = HuggingFaceClassifier::from_config(config.as_ref());
    tracing::info!(
        "🤖 Model: {} via {} (token: {}), max_length: {} words",
        config.model_name(),
        classifier.model_url(),
        if config.api_token().is_some() { "set" } else { "none" },
        config.max_length()
    );

    let state = AppState::from_config(config.as_ref(), Arc::new(classifier));
    let listener = TcpListener::bind(config.bind_address()).await?;

    api::serve(listener, state, api::shutdown_signal()).await
}
