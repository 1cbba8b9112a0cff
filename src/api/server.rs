use crate::api::routes;
use crate::cli::Cli;
use crate::db::Database;
use std::net::SocketAddr;
use tracing::info;

/// Starts and runs the HTTP server using Axum web framework
///
/// Opens the SQLite database named by `DATABASE_PATH` (falling back to the
/// CLI argument), creates the schema if absent and serves the meeting routes
/// until the process exits.
///
/// # Arguments
/// * `cli` - Parsed command line arguments carrying port and database path
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Ok if server runs to completion, Error if startup fails
pub async fn launch_server(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let db_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| cli.database_path.clone());

    let database = Database::new(&db_path)?;
    database.init_schema()?;
    info!("Database ready at {}", db_path);

    let app = routes::app(database);

    let addr = SocketAddr::from(([127, 0, 0, 1], cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
