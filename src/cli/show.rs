use colored::Colorize;
use stocksheet::{api, api::ExportOptions, data::stock::StockEntry};
use tabled::settings::{
    Alignment, Color,
    object::{Columns, Object, Rows},
};

use crate::cli::{fatal, load_config, new_spinner};

#[derive(clap::Args)]
pub struct ShowCommand {
    #[arg(short = 'u', long = "url", help = "Stock API to fetch, e.g. -u https://example.com/trending")]
    api_url: Option<String>,
}

impl ShowCommand {
    pub async fn exec(&self) {
        let mut options = ExportOptions::from_config(&load_config());
        if let Some(api_url) = &self.api_url {
            options.api_url = api_url.to_string();
        }

        let source = match api::build_source(&options) {
            Ok(source) => source,
            Err(err) => fatal("Error fetching stock data", &err),
        };

        let spinner = new_spinner(format!("Fetching {}", options.api_url));
        match api::fetch_stocks(source.as_ref()).await {
            Ok(stocks) => {
                spinner.finish_and_clear();

                if stocks.is_empty() {
                    println!("[!] No stock in '{}'", options.api_url.yellow());
                    return;
                }

                let mut table_data: Vec<Vec<String>> = vec![
                    StockEntry::HEADERS
                        .iter()
                        .map(|header| header.to_string())
                        .collect(),
                ];
                for stock in &stocks {
                    table_data.push(stock.cells().iter().map(|cell| cell.to_text()).collect());
                }

                let mut table = tabled::builder::Builder::from_iter(&table_data).build();
                table.modify(Rows::first(), Color::FG_BRIGHT_BLACK);
                table.modify(Columns::first().not(Rows::first()), Color::FG_CYAN);
                table.modify(Columns::new(2..), Alignment::right());
                println!("{table}");
            }
            Err(err) => {
                spinner.finish_and_clear();
                fatal("Error fetching stock data", &err);
            }
        }
    }
}
