/// Meeting type stored when a create or update payload omits `type`.
pub const DEFAULT_MEETING_TYPE: &str = "General";

/// SQLite file used when neither `--database-path` nor `DATABASE_PATH` is set.
pub const DEFAULT_DATABASE_PATH: &str = "meetings.db";

/// Port the HTTP listener binds when `--port` is not given.
pub const DEFAULT_PORT: u16 = 5000;

/// Schema bootstrap statement, run at startup. Idempotent so restarting
/// against an existing database is harmless. AUTOINCREMENT keeps deleted
/// ids from being reused.
pub const CREATE_MEETINGS_TABLE: &str = "CREATE TABLE IF NOT EXISTS meetings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title VARCHAR(120) NOT NULL,
    date VARCHAR(10) NOT NULL,
    time VARCHAR(5) NOT NULL,
    description VARCHAR(250),
    type VARCHAR(50) NOT NULL
)";
