use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

/// How long a writer waits for the SQLite write lock before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open (creating if missing) the SQLite database at `path`.
pub async fn connect(path: &Path, max_connections: u32) -> DbErrorResult<SqlitePool> {
    debug!(
        "Opening SQLite pool at {} (max {} connections)",
        path.display(),
        max_connections
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(BUSY_TIMEOUT),
        )
        .await?;

    Ok(pool)
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Migrations complete");
    Ok(())
}

/// Round-trip a trivial query, failing if it does not finish within `timeout`.
pub async fn ping(pool: &SqlitePool, timeout: Duration) -> DbErrorResult<()> {
    let query = sqlx::query_scalar::<_, i64>("SELECT 1").fetch_one(pool);

    match tokio::time::timeout(timeout, query).await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(DbError::from(e)),
        Err(_) => Err(DbError::Initialization {
            message: format!("database did not answer within {}s", timeout.as_secs()),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
