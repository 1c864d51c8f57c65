use stocksheet::api;
use tabled::settings::{Color, object::Columns};

use crate::cli::fatal;

#[derive(clap::Args)]
pub struct ConfigSetCommand {
    key: String,
    value: String,
}

impl ConfigSetCommand {
    pub async fn exec(&self) {
        match api::set_config(&self.key, &self.value) {
            Ok(config) => {
                let value = config.get(&self.key).unwrap_or_default();
                let table_data: Vec<Vec<String>> = vec![vec![self.key.to_lowercase(), value]];

                let mut table = tabled::builder::Builder::from_iter(&table_data).build();
                table.modify(Columns::first(), Color::FG_CYAN);
                println!("{table}");
            }
            Err(err) => {
                fatal("Error setting config", &err);
            }
        }
    }
}
