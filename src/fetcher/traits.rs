use crate::config::MarketQuery;
use crate::model::FetchError;
use serde_json::Value;

#[async_trait::async_trait]
pub trait MarketFetcher: Send + Sync {
    async fn fetch(&self, query: &MarketQuery) -> Result<Vec<Value>, FetchError>;
}
