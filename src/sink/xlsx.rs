use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, info};
use rust_xlsxwriter::{Format, Workbook};

use crate::{
    data::{Cell, stock::StockEntry},
    error::{SsError, SsResult},
    sink::{StockSink, ensure_parent_dir},
};

pub struct XlsxSink {
    path: PathBuf,
    sheet_name: String,
}

impl XlsxSink {
    pub fn new(path: &Path, sheet_name: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            sheet_name: sheet_name.to_string(),
        }
    }

    fn build_workbook(&self, stocks: &[StockEntry]) -> SsResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, header) in StockEntry::HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, stock) in stocks.iter().enumerate() {
            let row = (i + 1) as u32;
            for (col, cell) in stock.cells().iter().enumerate() {
                match cell {
                    Cell::Text(s) => worksheet.write_string(row, col as u16, *s)?,
                    Cell::Number(n) => worksheet.write_number(row, col as u16, *n)?,
                };
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

#[async_trait]
impl StockSink for XlsxSink {
    async fn write(&self, stocks: &[StockEntry]) -> SsResult<PathBuf> {
        let buffer = self.build_workbook(stocks)?;
        debug!(
            "Built workbook '{}' with {} rows ({} bytes)",
            self.sheet_name,
            stocks.len() + 1,
            buffer.len()
        );

        ensure_parent_dir(&self.path).await?;

        tokio::fs::write(&self.path, &buffer)
            .await
            .map_err(|source| SsError::SaveFileError {
                path: self.path.to_string_lossy().to_string(),
                source,
            })?;
        info!("Excel file saved at: {}", self.path.to_string_lossy());

        Ok(self.path.clone())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
