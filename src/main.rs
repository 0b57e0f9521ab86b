//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `page_extract` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use page_extract::initialization::init_logger_with;
use page_extract::{init_state, start_server, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // so API_KEY can live in .env without exporting it manually.
    // Try the current directory first, then the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config: Config = Opt::parse().into();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let result = async {
        let state = init_state(&config).context("Failed to initialize HTTP clients")?;
        start_server(&config, state).await
    }
    .await;

    if let Err(e) = result {
        eprintln!("page_extract error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
