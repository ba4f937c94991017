use crate::error::{ErrorCore, Result};
use crate::server::default_config::DEFAULT_LOG_FILTER;
use std::env;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; `WRITEWISP_DEBUG=true` forces debug output for
/// the workspace crates.
pub fn init_logger() -> Result<()> {
    let writewisp_debug = env::var("WRITEWISP_DEBUG").unwrap_or_else(|_| "false".to_string());

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if writewisp_debug == "true" => {
            EnvFilter::new("info,writewisp=debug,ww_core=debug")
        }
        Err(_) => EnvFilter::new(DEFAULT_LOG_FILTER),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ErrorCore::LoggerInit(e.to_string()))
}
