use std::path::PathBuf;

use colored::Colorize;
use stocksheet::{
    api,
    api::ExportOptions,
    config::Config,
    sink::{OutputFormat, parse_output_format},
};

use crate::cli::{fatal, load_config, new_spinner};

#[derive(clap::Args, Default)]
pub struct ExportCommand {
    #[arg(short = 'u', long = "url", help = "Stock API to fetch, e.g. -u https://example.com/trending")]
    api_url: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        help = "Output file, the default value is data/stock_data.xlsx"
    )]
    output: Option<PathBuf>,

    #[arg(
        short = 's',
        long = "sheet",
        help = "Sheet name of the workbook, the default value is 'Stock Data'"
    )]
    sheet_name: Option<String>,

    #[arg(
        long = "format",
        value_parser = parse_output_format,
        help = "Output format, xlsx or csv, inferred from the output file by default"
    )]
    format: Option<OutputFormat>,

    #[arg(
        short = 't',
        long = "timeout",
        help = "Request timeout in seconds, the default value is 30"
    )]
    timeout_secs: Option<u64>,
}

impl ExportCommand {
    pub async fn exec(&self) {
        let options = self.resolve(&load_config());

        let source = match api::build_source(&options) {
            Ok(source) => source,
            Err(err) => fatal("Error fetching stock data", &err),
        };
        let sink = api::build_export_sink(&options);

        let spinner = new_spinner(format!("Fetching {}", options.api_url));
        let stocks = match api::fetch_stocks(source.as_ref()).await {
            Ok(stocks) => {
                spinner.finish_and_clear();
                stocks
            }
            Err(err) => {
                spinner.finish_and_clear();
                fatal("Error fetching stock data", &err);
            }
        };

        match api::write_stocks(sink.as_ref(), &stocks).await {
            Ok(path) => {
                println!(
                    "[✔] {} stocks saved at: {}",
                    stocks.len(),
                    path.to_string_lossy().green()
                );
            }
            Err(err) => {
                fatal("Error generating spreadsheet file", &err);
            }
        }
    }

    fn resolve(&self, config: &Config) -> ExportOptions {
        let defaults = ExportOptions::from_config(config);

        ExportOptions {
            api_url: self.api_url.clone().unwrap_or(defaults.api_url),
            output_path: self.output.clone().unwrap_or(defaults.output_path),
            sheet_name: self.sheet_name.clone().unwrap_or(defaults.sheet_name),
            format: self.format.or(defaults.format),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
        }
    }
}
