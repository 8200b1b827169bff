pub mod coingecko;
pub mod traits;

pub use coingecko::CoinGeckoFetcher;
pub use traits::MarketFetcher;
