use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use puppy_bowl::api::PuppyBowlClient;
use puppy_bowl::app::App;
use puppy_bowl::config::Config;

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            std::process::exit(1);
        }
    };
    let endpoint = match config.endpoint() {
        Ok(endpoint) => endpoint,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(%endpoint, "connecting to Puppy Bowl API");

    let client = PuppyBowlClient::new(endpoint, reqwest::Client::new());
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());

    let mut app = App::new(client, std::io::stdout());
    if let Err(error) = app.run(stdin).await {
        tracing::error!(%error, "terminal i/o failed");
        std::process::exit(1);
    }
}
