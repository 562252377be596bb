use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlxSqliteConnector, TransactionTrait};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::{path::PathBuf, str::FromStr, time::Duration};
use tokio::fs;

pub type DbPool = SqlitePool;

pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// How long a connection waits on another writer's lock before giving up.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(10);

/// Create a SQLite pool with foreign key enforcement switched on.
///
/// File stores run in WAL mode so readers never block the single writer,
/// and writers queue on [`BUSY_TIMEOUT`] instead of failing with
/// `database is locked`.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = if is_in_memory(database_url) {
        // Every connection to an in-memory database opens a fresh, empty one,
        // so the pool must hold exactly one connection for its whole lifetime.
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        let options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?
    };

    tracing::debug!(database_url, "sqlite pool ready");
    Ok(pool)
}

/// Create a SeaORM connection on top of [`create_pool`].
pub async fn create_orm_conn(database_url: &str, max_connections: u32) -> Result<DatabaseConnection> {
    let pool = create_pool(database_url, max_connections).await?;
    Ok(orm_from_pool(pool))
}

/// Share an existing pool with SeaORM.
pub fn orm_from_pool(pool: DbPool) -> DatabaseConnection {
    SqlxSqliteConnector::from_sqlx_sqlite_pool(pool)
}

/// Applies every `.sql` file in `migrations/` in filename order.
///
/// Each file runs inside its own transaction, so a file that fails halfway
/// leaves no partial schema behind. Statements are `IF NOT EXISTS` guarded
/// and the runner is called on every start.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    let mut entries = fs::read_dir(MIGRATIONS_DIR).await?;
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    for file in &files {
        let sql = fs::read_to_string(file).await?;
        let txn = conn.begin().await?;
        let mut applied = 0usize;
        for stmt in sql_statements(&sql) {
            txn.execute_unprepared(stmt).await?;
            applied += 1;
        }
        txn.commit().await?;
        tracing::debug!(file = %file.display(), statements = applied, "migration applied");
    }

    tracing::info!(files = files.len(), "schema up to date");
    Ok(())
}

/// Splits a migration script on `;`, dropping blank fragments and
/// whole-line `--` comments.
fn sql_statements(sql: &str) -> impl Iterator<Item = &str> {
    sql.split(';').map(str::trim).filter(|stmt| {
        stmt.lines()
            .any(|line| !line.trim().is_empty() && !line.trim_start().starts_with("--"))
    })
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
