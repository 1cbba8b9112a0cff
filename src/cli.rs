use crate::constants::{DEFAULT_DATABASE_PATH, DEFAULT_PORT};
use clap::Parser;

/// Command line interface for the meeting record service
#[derive(Parser)]
pub struct Cli {
    /// Port the HTTP listener binds on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path to the SQLite database file
    /// The DATABASE_PATH environment variable takes precedence when set
    #[arg(long, default_value_t = String::from(DEFAULT_DATABASE_PATH))]
    pub database_path: String,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file in the "logs" directory
    #[arg(long)]
    pub log_to_file: bool,
}
