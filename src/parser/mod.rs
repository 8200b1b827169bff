pub mod market_parser;

pub use market_parser::parse_market_table;
