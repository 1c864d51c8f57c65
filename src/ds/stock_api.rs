use std::collections::HashMap;

use async_trait::async_trait;
use fake_user_agent::get_rua;
use log::{debug, info};

use crate::{
    data::stock::{StockApiResponse, StockEntry},
    ds::StockSource,
    error::SsResult,
    utils::net::{http_get, validate_url},
};

pub struct StockApiSource {
    api_url: String,
    timeout_secs: u64,
}

impl StockApiSource {
    pub fn new(api_url: &str, timeout_secs: u64) -> SsResult<Self> {
        validate_url(api_url)?;

        Ok(Self {
            api_url: api_url.to_string(),
            timeout_secs,
        })
    }
}

#[async_trait]
impl StockSource for StockApiSource {
    async fn fetch(&self) -> SsResult<Vec<StockEntry>> {
        let mut headers: HashMap<String, String> = HashMap::new();
        headers.insert(
            reqwest::header::USER_AGENT.to_string(),
            get_rua().to_string(),
        );
        headers.insert(
            reqwest::header::ACCEPT.to_string(),
            "application/json".to_string(),
        );

        debug!("GET {}", self.api_url);
        let bytes = http_get(&self.api_url, &headers, self.timeout_secs).await?;

        let json: StockApiResponse = serde_json::from_slice(&bytes)?;
        info!(
            "Received {} stocks from {}",
            json.response.len(),
            self.api_url
        );

        Ok(json.response)
    }

    fn describe(&self) -> String {
        self.api_url.to_string()
    }
}
