use async_trait::async_trait;

use crate::{data::stock::StockEntry, error::SsResult};

pub mod stock_api;

#[async_trait]
pub trait StockSource: Send + Sync {
    async fn fetch(&self) -> SsResult<Vec<StockEntry>>;

    fn describe(&self) -> String;
}
