use serde::{Deserialize, Serialize};

use crate::data::Cell;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct StockApiResponse {
    pub response: Vec<StockEntry>,
}

/// Trading snapshot of a single stock, with the same field names as the API.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct StockEntry {
    pub ticker: String,
    pub ticker_name: String,
    pub latest_price: String, // Kept as received
    pub points_change: f64,
    pub percentage_change: f64,
    pub traded_of_mkt_cap: f64,
}

impl StockEntry {
    pub const HEADERS: [&'static str; 6] = [
        "Ticker",
        "Ticker Name",
        "Latest Price",
        "Points Change",
        "Percentage Change",
        "Traded Of Mkt Cap",
    ];

    /// Field values in the same order as [`StockEntry::HEADERS`].
    pub fn cells(&self) -> [Cell<'_>; 6] {
        [
            Cell::Text(&self.ticker),
            Cell::Text(&self.ticker_name),
            Cell::Text(&self.latest_price),
            Cell::Number(self.points_change),
            Cell::Number(self.percentage_change),
            Cell::Number(self.traded_of_mkt_cap),
        ]
    }
}
