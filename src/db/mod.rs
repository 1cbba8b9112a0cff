mod meeting_repository;
mod models;

use crate::constants::CREATE_MEETINGS_TABLE;
use crate::errors::Error;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::RunQueryDsl;
use std::sync::Arc;

pub use meeting_repository::*;
pub use models::*;

/// Shared handle to the SQLite connection pool, cloned into every handler
/// instead of living in a global.
#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl Database {
    /// Opens (or creates) the SQLite database at `db_path` and builds the
    /// connection pool around it.
    pub fn new(db_path: &str) -> Result<Self, Error> {
        let manager = ConnectionManager::<SqliteConnection>::new(db_path);
        let pool = Pool::builder().build(manager)?;

        Ok(Database {
            pool: Arc::new(pool),
        })
    }

    pub fn get_conn(
        &self,
    ) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, Error> {
        Ok(self.pool.get()?)
    }

    /// Creates the meetings table if it does not exist yet.
    pub fn init_schema(&self) -> Result<(), Error> {
        let mut conn = self.get_conn()?;
        diesel::sql_query(CREATE_MEETINGS_TABLE).execute(&mut conn)?;
        Ok(())
    }
}
