//! Main entry point for the meeting record service.
//!
//! This module initializes logging, loads environment variables, prepares the
//! SQLite schema and starts the HTTP listener serving the meeting CRUD API.

use agendum::{api, cli, utils};
use clap::Parser;
use tracing::{error, warn};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Initialize logging system
/// 3. Load environment variables
/// 4. Start the API server
#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_to_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    if let Err(e) = api::server::launch_server(&cli).await {
        error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
