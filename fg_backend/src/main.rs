use crate::config::{BackendConfig, load_dotenv};
use fg_core::logger::init_logger;
use tracing::{error, warn};

mod application;
mod clients;
mod config;
mod domain;
mod error;
mod infrastructure;
mod interfaces;
mod server;
mod use_cases;
mod utils;

fn main() {
    let dotenv = load_dotenv();
    init_logger();
    if let Err(err) = dotenv {
        warn!("Ignoring unreadable .env: {err}");
    }

    let config = match BackendConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = server::http_server::http_server_backend(config) {
        error!("{err}");
        std::process::exit(1);
    }
}
