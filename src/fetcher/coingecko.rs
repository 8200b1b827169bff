use crate::config::MarketQuery;
use crate::fetcher::traits::MarketFetcher;
use crate::model::FetchError;

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub struct CoinGeckoFetcher {
    client: Client,
}

impl CoinGeckoFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent("CoinSnapshot/0.1");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl MarketFetcher for CoinGeckoFetcher {
    async fn fetch(&self, query: &MarketQuery) -> Result<Vec<Value>, FetchError> {
        let response = self
            .client
            .get(&query.url)
            .query(&query.as_params())
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let records: Vec<Value> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        check_page_size(records, query.per_page)
    }
}

/// A page that is not exactly `per_page` long is treated as a failed fetch.
pub fn check_page_size(records: Vec<Value>, per_page: usize) -> Result<Vec<Value>, FetchError> {
    if records.len() != per_page {
        return Err(FetchError::PageSize {
            expected: per_page,
            actual: records.len(),
        });
    }
    Ok(records)
}
