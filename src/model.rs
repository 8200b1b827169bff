// Core structs: MarketRecord, MarketTable, SummaryReport and the error types
use std::path::PathBuf;
use thiserror::Error;

/// Human-readable column headers, in export order.
pub const COLUMN_LABELS: [&str; 6] = [
    "Cryptocurrency Name",
    "Symbol",
    "Current Price (USD)",
    "Market Capitalization",
    "24h Trading Volume",
    "Price Change (24h %)",
];

/// One coin as returned by the markets endpoint, projected to the fields we keep.
/// Numeric fields are `None` when the endpoint sends `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketRecord {
    pub name: String,
    pub symbol: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
}

/// Records in source order (descending market cap as requested).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketTable {
    pub records: Vec<MarketRecord>,
}

impl MarketTable {
    pub fn new(records: Vec<MarketRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceChange {
    pub name: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    /// (name, market cap), largest first.
    pub top_by_market_cap: Vec<(String, f64)>,
    /// `None` when no record carries the value.
    pub average_price: Option<f64>,
    pub record_count: usize,
    pub highest_change: Option<PriceChange>,
    pub lowest_change: Option<PriceChange>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("response is not a JSON array of coins: {0}")]
    Decode(String),

    #[error("expected {expected} records, got {actual}")]
    PageSize { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("record {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: field `{field}` has the wrong type")]
    InvalidField { index: usize, field: &'static str },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// Anything that can abandon a single cycle after a successful fetch.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Parse(#[from] ParserError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
