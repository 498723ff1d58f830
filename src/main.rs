use anyhow::{Context, Result};
use chirp_bot::config::Config;
use chirp_bot::feed::rss::RssClient;
use chirp_bot::platform::rest::PlatformRest;
use chirp_bot::platform::Platform;
use chirp_bot::scheduler::Scheduler;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "chirp_bot=info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter.as_str()).init();

    // Saved credentials from .env; real env vars take precedence.
    Config::load_env_file();

    let config = Config::load(Path::new("config.json"))?;
    let token = Config::bearer_token()?;

    let platform = PlatformRest::new(&config.api.base_url, token);
    let account = platform
        .verify_credentials()
        .await
        .context("credential check failed")?;
    tracing::info!(account = %account.screen_name, "authenticated");

    let feed = RssClient::new();
    Scheduler::from_config(platform, feed, &config).run().await
}
