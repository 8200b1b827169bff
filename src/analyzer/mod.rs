// Analyzer module: summary statistics over one market table.

pub mod market_indicators;
pub mod price_analysis;

pub use price_analysis::analyze;
