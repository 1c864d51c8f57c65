use std::process;

use clap::Subcommand;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, warn};
use stocksheet::{api, config::Config, error::SsError};
use tokio::time::Duration;

pub mod config;
pub mod export;
pub mod show;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show or change configurations")]
    Config(Box<config::ConfigArgs>),

    #[command(about = "Fetch trending stocks and save them as a spreadsheet (default)")]
    Export(Box<export::ExportCommand>),

    #[command(about = "Fetch trending stocks and print them without saving")]
    #[clap(visible_aliases = &["ls"])]
    Show(Box<show::ShowCommand>),
}

pub fn fatal(context: &str, err: &SsError) -> ! {
    error!("[{}] {context}: {err}", err.code());
    eprintln!("[!] {context}: {}", err.to_string().red());

    process::exit(1);
}

pub fn load_config() -> Config {
    match api::get_config() {
        Ok(config) => config,
        Err(err) => {
            warn!("Unable to load config, fall back to defaults: {err}");
            Config::default()
        }
    }
}

pub fn new_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("[{elapsed}] {msg} {spinner:.cyan}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    spinner
}
