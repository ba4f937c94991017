use tracing::error;
use ww_core::logger::init_logger;

mod application;
mod clients;
mod config;
mod db;
mod domain;
mod error;
mod interfaces;
mod server;
mod use_cases;
mod utils;

fn main() {
    if let Err(e) = init_logger() {
        eprintln!("{e}");
    }
    if let Err(e) = server::http_server::http_server_backend() {
        error!("{e}");
        std::process::exit(1);
    }
}
