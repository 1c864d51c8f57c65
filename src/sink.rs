use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use async_trait::async_trait;

use crate::{
    data::stock::StockEntry,
    error::{SsError, SsResult},
};

pub mod csv;
pub mod xlsx;

#[derive(Clone, Copy, Debug, Default, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Xlsx,
    Csv,
}

#[async_trait]
pub trait StockSink: Send + Sync {
    /// Writes the header row and one row per stock, returning the saved path.
    async fn write(&self, stocks: &[StockEntry]) -> SsResult<PathBuf>;

    fn path(&self) -> &Path;
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Xlsx,
        }
    }
}

pub fn build_sink(
    format: Option<OutputFormat>,
    path: &Path,
    sheet_name: &str,
) -> Box<dyn StockSink> {
    match format.unwrap_or_else(|| OutputFormat::from_path(path)) {
        OutputFormat::Xlsx => Box::new(xlsx::XlsxSink::new(path, sheet_name)),
        OutputFormat::Csv => Box::new(csv::CsvSink::new(path)),
    }
}

pub async fn ensure_parent_dir(path: &Path) -> SsResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| SsError::CreateDirError {
                    path: parent.to_string_lossy().to_string(),
                    source,
                })?;
        }
    }

    Ok(())
}

pub fn parse_output_format(s: &str) -> SsResult<OutputFormat> {
    OutputFormat::from_str(s).map_err(Into::into)
}
