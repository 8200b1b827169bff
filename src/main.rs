mod analyzer;
mod config;
mod fetcher;
mod model;
mod parser;
mod scheduler;
mod storage;
mod utils;

use config::{CONFIG_FILE, load_config};
use fetcher::CoinGeckoFetcher;
use std::time::Duration;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config = match load_config(CONFIG_FILE) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let fetcher = match CoinGeckoFetcher::new(config.request_timeout_seconds.map(Duration::from_secs)) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };

    info!(
        "Snapshotting top {} coins every {}s",
        config.query.per_page,
        config.check_interval_seconds
    );
    scheduler::run_forever(&fetcher, &config).await;
}
