use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::{
    APP_NAME,
    config::Config,
    data::stock::StockEntry,
    ds::{StockSource, stock_api::StockApiSource},
    error::SsResult,
    sink::{OutputFormat, StockSink, build_sink},
};

#[derive(Clone, Debug, PartialEq)]
pub struct ExportOptions {
    pub api_url: String,
    pub output_path: PathBuf,
    pub sheet_name: String,
    pub format: Option<OutputFormat>,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

impl ExportOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_url: config.api_url.to_string(),
            output_path: config.output_path(),
            sheet_name: config.sheet_name.to_string(),
            format: None,
            timeout_secs: config.timeout_secs,
        }
    }
}

pub async fn fetch_stocks(source: &dyn StockSource) -> SsResult<Vec<StockEntry>> {
    debug!("Fetching stocks from {}", source.describe());

    let stocks = source.fetch().await?;
    info!("Fetched {} stocks", stocks.len());

    Ok(stocks)
}

pub async fn write_stocks(sink: &dyn StockSink, stocks: &[StockEntry]) -> SsResult<PathBuf> {
    debug!(
        "Writing {} stocks to {}",
        stocks.len(),
        sink.path().to_string_lossy()
    );

    sink.write(stocks).await
}

pub async fn export(source: &dyn StockSource, sink: &dyn StockSink) -> SsResult<ExportSummary> {
    let stocks = fetch_stocks(source).await?;
    let path = write_stocks(sink, &stocks).await?;

    Ok(ExportSummary {
        path,
        rows: stocks.len(),
    })
}

pub fn build_source(options: &ExportOptions) -> SsResult<Box<dyn StockSource>> {
    Ok(Box::new(StockApiSource::new(
        &options.api_url,
        options.timeout_secs,
    )?))
}

pub fn build_export_sink(options: &ExportOptions) -> Box<dyn StockSink> {
    build_sink(options.format, &options.output_path, &options.sheet_name)
}

pub fn get_config() -> SsResult<Config> {
    let path = get_config_path()?;
    load_config_from(&path)
}

/// Missing file yields the defaults without creating anything on disk.
pub fn load_config_from(path: &Path) -> SsResult<Config> {
    if path.is_file() {
        Ok(confy::load_path(path)?)
    } else {
        debug!("No config at {}, using defaults", path.to_string_lossy());
        Ok(Config::default())
    }
}

pub fn get_config_path() -> SsResult<PathBuf> {
    Ok(confy::get_configuration_file_path(APP_NAME, None)?)
}

pub fn set_config(key: &str, value: &str) -> SsResult<Config> {
    let mut config = get_config()?;
    config.set(key, value)?;
    confy::store(APP_NAME, None, &config)?;

    Ok(config)
}
