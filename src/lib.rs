//! # stocksheet lib

use std::env;

pub mod api;
pub mod config;
pub mod data;
pub mod ds;
pub mod error;
pub mod sink;
pub mod utils;

pub static APP_NAME: &str = env!("CARGO_PKG_NAME");
pub static VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn init() {
    env_logger::Builder::new()
        .parse_filters(env::var("LOG").as_deref().unwrap_or("off"))
        .init();
}
