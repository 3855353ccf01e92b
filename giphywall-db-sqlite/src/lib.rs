use anyhow::{anyhow, Result as Fallible};
use diesel::{connection::SimpleConnection as _, r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use giphywall_core::{repositories as repo, usecases as uc};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{
    cell::{RefCell, RefMut},
    fs,
    path::Path,
    sync::Arc,
};

mod models;
mod repo_impl;
mod schema;
mod util;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

const IN_MEMORY_URL: &str = ":memory:";

type Connection = SqliteConnection;

type ConnectionManager = r2d2::ConnectionManager<Connection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

type SharedConnectionPool = Arc<RwLock<ConnectionPool>>;

pub struct DbReadOnly<'a> {
    _locked_pool: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

impl<'a> DbReadOnly<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let locked_pool = pool.read();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for read-only access: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }
}

pub struct DbReadWrite<'a> {
    _locked_pool: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// A connection that is bound to a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbConnection<'a> {
    fn new(conn: &'a mut SqliteConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }
}

impl<'a> DbReadWrite<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let locked_pool = pool.write();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for read/write access: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }

    /// Runs `f` inside a transaction that is rolled back if `f` fails.
    pub fn transaction<T, F, E>(&self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        // The usecase error needs to be smuggled out of the
        // transaction closure, because diesel only accepts
        // its own error type for signaling a rollback.
        let mut usecase_error = None;
        let mut pooled_conn = self.sqlite_conn();
        let conn: &mut SqliteConnection = &mut pooled_conn;
        conn.transaction(|conn| {
            f(&DbConnection::new(conn))
                .map_err(Into::into)
                .map_err(|err| {
                    usecase_error = Some(err);
                    diesel::result::Error::RollbackTransaction
                })
        })
        .map_err(|err| {
            if let Some(usecase_error) = usecase_error {
                debug_assert!(matches!(err, diesel::result::Error::RollbackTransaction));
                usecase_error
            } else {
                uc::Error::Repo(repo_impl::from_diesel_err(err))
            }
        })
    }

    fn sqlite_conn(&self) -> RefMut<PooledConnection> {
        self.conn.borrow_mut()
    }
}

#[derive(Clone)]
pub struct Connections {
    // Only a single connection with write access will be
    // handed out at a time from the pool. Multiple read
    // connections can be accessed concurrently. This locking
    // pattern around the connection pool prevents SQLITE_LOCKED
    // ("database is locked") errors.
    pool: SharedConnectionPool,
}

#[derive(Debug, Clone, Copy)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        // Per-connection settings that are not persisted in the database file
        conn.batch_execute(
            r#"
PRAGMA busy_timeout = 5000;       -- wait instead of failing if another process holds a lock
PRAGMA synchronous = NORMAL;      -- fsync only in critical moments, safe for journal_mode = WAL
PRAGMA foreign_keys = 1;          -- check foreign key constraints
"#,
        )
        .map_err(r2d2::Error::QueryError)
    }
}

/// Configure the database engine
///
/// Some values like the text encoding can only be changed once after the
/// database has initially been created.
fn initialize_database(connection: &mut SqliteConnection) -> Fallible<()> {
    connection.batch_execute(
        r#"
PRAGMA journal_mode = WAL;        -- better write-concurrency
PRAGMA wal_autocheckpoint = 1000; -- write WAL changes back every 1000 pages (default), for an in average 1MB WAL file
PRAGMA wal_checkpoint(TRUNCATE);  -- free some space by truncating possibly massive WAL files from the last run
PRAGMA secure_delete = 0;         -- avoid some disk I/O
PRAGMA automatic_index = 1;       -- detect and log missing indexes
PRAGMA encoding = 'UTF-8';
"#,
    )?;
    Ok(())
}

fn create_parent_dir(url: &str) -> Fallible<()> {
    if url == IN_MEMORY_URL || url.starts_with("file:") {
        return Ok(());
    }
    if let Some(parent) = Path::new(url).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            log::info!("Creating database directory {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

impl Connections {
    /// Opens the database at `url`, creating the file if it doesn't exist yet.
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        create_parent_dir(url)?;
        // Establish a test connection before creating the connection pool to fail early.
        // If the given file is inaccessible r2d2 would do multiple retries and log
        // errors instead of simply failing and returning an error immediately.
        use diesel::Connection as _;
        let _ = SqliteConnection::establish(url).inspect_err(|err| {
            log::error!("Failed to open SQLite database '{url}': {err}");
        })?;
        let manager = ConnectionManager::new(url);
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionCustomizer))
            .build(manager)?;
        Ok(Self::new(pool))
    }

    fn new(pool: ConnectionPool) -> Self {
        Self {
            pool: Arc::new(RwLock::new(pool)),
        }
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        DbReadOnly::try_new(&self.pool)
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        DbReadWrite::try_new(&self.pool)
    }
}

/// Creates all tables that do not exist yet.
///
/// Safe to be invoked on every start, an already initialized
/// database is left untouched.
pub fn initialize(connections: &Connections) -> Fallible<()> {
    let db = connections.exclusive()?;
    let mut pooled_conn = db.sqlite_conn();
    let conn: &mut SqliteConnection = &mut pooled_conn;
    initialize_database(conn)?;
    log::info!("Running embedded database migrations");
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("Failed to run database migrations: {err}"))?;
    if applied.is_empty() {
        log::debug!("Database schema is up to date");
    } else {
        for version in applied {
            log::info!("Applied database migration {version}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::{sql_types::Text, QueryableByName, RunQueryDsl as _};

    #[derive(QueryableByName, Debug, PartialEq, Eq)]
    struct SchemaEntry {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        sql: String,
    }

    fn load_schema(connections: &Connections) -> Vec<SchemaEntry> {
        let db = connections.shared().unwrap();
        let mut conn = db.conn.borrow_mut();
        diesel::sql_query(
            "SELECT name, sql FROM sqlite_master \
             WHERE sql IS NOT NULL AND name NOT LIKE '__diesel%' ORDER BY name",
        )
        .load::<SchemaEntry>(&mut **conn)
        .unwrap()
    }

    #[test]
    fn initialize_in_memory_database() {
        let connections = Connections::init(IN_MEMORY_URL, 1).unwrap();
        initialize(&connections).unwrap();
        let tables: Vec<_> = load_schema(&connections)
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        for table in ["comments", "gifs", "users"] {
            assert!(tables.iter().any(|name| name == table), "missing {table}");
        }
    }

    #[test]
    fn initialize_twice() {
        let connections = Connections::init(IN_MEMORY_URL, 1).unwrap();
        initialize(&connections).unwrap();
        let schema = load_schema(&connections);
        initialize(&connections).unwrap();
        assert_eq!(schema, load_schema(&connections));
    }

    #[test]
    fn reopen_initialized_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_file = dir.path().join("nested").join("giphywall.db");
        let url = db_file.to_str().unwrap();
        let schema = {
            let connections = Connections::init(url, 2).unwrap();
            initialize(&connections).unwrap();
            load_schema(&connections)
        };
        assert!(db_file.exists());
        let connections = Connections::init(url, 2).unwrap();
        initialize(&connections).unwrap();
        assert_eq!(schema, load_schema(&connections));
    }
}
