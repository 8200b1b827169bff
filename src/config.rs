use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const MARKETS_URL: &str = "https://api.coingecko.com/api/v3/coins/markets";
pub const VS_CURRENCY: &str = "usd";
pub const ORDER: &str = "market_cap_desc";
pub const PER_PAGE: usize = 50;
pub const PAGE: u32 = 1;
pub const SPARKLINE: bool = false;
pub const CHECK_INTERVAL_SECONDS: u64 = 5 * 60;
pub const CONFIG_FILE: &str = "config.json";

/// Fixed query sent to the markets endpoint on every cycle.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarketQuery {
    pub url: String,
    pub vs_currency: String,
    pub order: String,
    pub per_page: usize,
    pub page: u32,
    pub sparkline: bool,
}

impl Default for MarketQuery {
    fn default() -> Self {
        Self {
            url: MARKETS_URL.to_string(),
            vs_currency: VS_CURRENCY.to_string(),
            order: ORDER.to_string(),
            per_page: PER_PAGE,
            page: PAGE,
            sparkline: SPARKLINE,
        }
    }
}

impl MarketQuery {
    pub fn as_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", self.vs_currency.clone()),
            ("order", self.order.clone()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("sparkline", self.sparkline.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub query: MarketQuery,
    pub check_interval_seconds: u64,
    pub output_dir: PathBuf,
    /// `None` leaves the request without a timeout.
    pub request_timeout_seconds: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            query: MarketQuery::default(),
            check_interval_seconds: CHECK_INTERVAL_SECONDS,
            output_dir: PathBuf::from("."),
            request_timeout_seconds: None,
        }
    }
}

/// Reads `path` if it exists; a missing file means built-in defaults.
pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
