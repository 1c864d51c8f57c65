use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::info;

use crate::{
    data::stock::StockEntry,
    error::{SsError, SsResult},
    sink::{StockSink, ensure_parent_dir},
};

pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn build_csv(&self, stocks: &[StockEntry]) -> SsResult<Vec<u8>> {
        let mut writer = ::csv::Writer::from_writer(vec![]);

        writer.write_record(StockEntry::HEADERS)?;
        for stock in stocks {
            writer.write_record(stock.cells().iter().map(|cell| cell.to_text()))?;
        }

        writer
            .into_inner()
            .map_err(|err| SsError::CsvError(err.into_error().into()))
    }
}

#[async_trait]
impl StockSink for CsvSink {
    async fn write(&self, stocks: &[StockEntry]) -> SsResult<PathBuf> {
        let buffer = self.build_csv(stocks)?;

        ensure_parent_dir(&self.path).await?;

        tokio::fs::write(&self.path, &buffer)
            .await
            .map_err(|source| SsError::SaveFileError {
                path: self.path.to_string_lossy().to_string(),
                source,
            })?;
        info!("CSV file saved at: {}", self.path.to_string_lossy());

        Ok(self.path.clone())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[tokio::test]
    async fn test_write() {
        let root =
            std::env::temp_dir().join(format!("stocksheet-csv-{}", std::process::id()));
        let path = root.join("data").join("stock_data.csv");
        let sink = CsvSink::new(&path);

        let stocks = vec![StockEntry {
            ticker: "ABC".to_string(),
            ticker_name: "Alpha, Inc".to_string(),
            latest_price: "120.5".to_string(),
            points_change: 1.2,
            percentage_change: 0.5,
            traded_of_mkt_cap: 3.1,
        }];

        // Second write replaces the first
        sink.write(&stocks).await.unwrap();
        sink.write(&stocks).await.unwrap();

        let mut reader = ::csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            StockEntry::HEADERS.to_vec()
        );

        let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].iter().collect::<Vec<_>>(),
            vec!["ABC", "Alpha, Inc", "120.5", "1.2", "0.5", "3.1"]
        );

        let _ = fs::remove_dir_all(&root);
    }

    #[tokio::test]
    async fn test_write_empty() {
        let root =
            std::env::temp_dir().join(format!("stocksheet-csv-empty-{}", std::process::id()));
        let path = root.join("stock_data.csv");

        CsvSink::new(&path).write(&[]).await.unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Ticker,Ticker Name,Latest Price,Points Change,Percentage Change,Traded Of Mkt Cap\n"
        );

        let _ = fs::remove_dir_all(&root);
    }
}
