use colored::Colorize;
use stocksheet::{api, config::CONFIG_KEYS};
use tabled::settings::{Color, object::Columns};

use crate::cli::load_config;

#[derive(clap::Args)]
pub struct ConfigShowCommand;

impl ConfigShowCommand {
    pub async fn exec(&self) {
        let config = load_config();

        let table_data: Vec<Vec<String>> = CONFIG_KEYS
            .iter()
            .map(|key| vec![key.to_string(), config.get(key).unwrap_or_default()])
            .collect();

        let mut table = tabled::builder::Builder::from_iter(&table_data).build();
        table.modify(Columns::first(), Color::FG_CYAN);
        println!("{table}");

        if let Ok(path) = api::get_config_path() {
            println!("{}", path.to_string_lossy().bright_black());
        }
    }
}
