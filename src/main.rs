//! # stocksheet CLI

use clap::Parser;

use crate::cli::{Commands, export::ExportCommand};

mod cli;

#[derive(Parser)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Export trending stock data into a spreadsheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    stocksheet::init();

    match &cli.command {
        Some(Commands::Config(cmd)) => {
            cmd.exec().await;
        }
        Some(Commands::Export(cmd)) => {
            cmd.exec().await;
        }
        Some(Commands::Show(cmd)) => {
            cmd.exec().await;
        }
        None => {
            ExportCommand::default().exec().await;
        }
    }
}
