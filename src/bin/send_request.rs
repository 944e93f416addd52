use clap::Parser;
use headline_sentiment::utils::logger;
use serde_json::json;

#[derive(Parser)]
#[command(name = "send_request")]
#[command(about = "Send sample headlines to a running headline-sentiment server")]
struct Args {
    /// Base URL of the server
    #[arg(long, default_value = "http://localhost:7860")]
    base_url: String,

    /// Headlines to classify
    #[arg(default_values_t = ["Stock market rises".to_string(), "Stock market crashes".to_string()])]
    headlines: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let client = reqwest::Client::new();
    let url = format!("{}/classify", args.base_url.trim_end_matches('/'));

    for headline in &args.headlines {
        let response = client
            .post(&url)
            .json(&json!({ "headline": headline }))
            .send()
            .await?;

        tracing::info!("Status: {}", response.status());
        let body: serde_json::Value = response.json().await?;
        tracing::info!("Response: {}", body);
    }

    Ok(())
}
