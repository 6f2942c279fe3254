//! Process-scoped database connection management.
//!
//! The application holds exactly one live database handle per process. The
//! handle is established lazily on first demand and memoized for every later
//! caller; first establishment runs behind a single-flight guard so that
//! concurrent first callers share one in-flight connection attempt instead of
//! racing to construct duplicate clients.

use sea_orm::{ConnectOptions, DatabaseConnection};
use tokio::sync::OnceCell;

use crate::server::error::AppError;

/// Process-wide database instance used by the running server.
///
/// Tests construct their own `Database` values instead of touching this
/// static, so the initialization lifecycle stays observable in isolation.
pub static DATABASE: Database = Database::new();

/// Lazily-initialized, memoized owner of the shared [`DatabaseConnection`].
///
/// Lifecycle: `init` once during startup (idempotent and safe under
/// concurrent callers), `handle` everywhere afterwards, `close` on teardown.
/// The running server never reaches `close`; the handle lives for the
/// process lifetime. Tests exercise the full cycle.
pub struct Database {
    conn: OnceCell<DatabaseConnection>,
}

impl Database {
    pub const fn new() -> Self {
        Self {
            conn: OnceCell::const_new(),
        }
    }

    /// Establishes the shared connection if it doesn't exist yet.
    ///
    /// Connects to the database at `database_url` and runs pending migrations,
    /// then caches the resulting handle. Only one initialization attempt is
    /// ever in flight: concurrent callers wait on the same attempt and all
    /// observe the same handle once it completes. Callers after the first
    /// return immediately without new network activity.
    ///
    /// # Arguments
    /// - `database_url` - Connection string for the database
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The shared handle, migrations applied
    /// - `Err(AppError)` - Failed to connect or run migrations
    pub async fn init(&self, database_url: &str) -> Result<&DatabaseConnection, AppError> {
        self.conn
            .get_or_try_init(|| async {
                use migration::{Migrator, MigratorTrait};

                let mut opt = ConnectOptions::new(database_url);
                opt.sqlx_logging(false);
                opt.connect_timeout(std::time::Duration::from_secs(10));

                let db = sea_orm::Database::connect(opt).await?;

                Migrator::up(&db, None).await?;

                Ok::<_, AppError>(db)
            })
            .await
    }

    /// Returns the established handle.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The shared handle
    /// - `Err(AppError::DatabaseNotInitialized)` - `init` has not completed yet
    pub fn handle(&self) -> Result<&DatabaseConnection, AppError> {
        self.conn.get().ok_or(AppError::DatabaseNotInitialized)
    }

    /// Closes the underlying connection pool.
    ///
    /// Teardown hook for process shutdown. A no-op when `init` never ran.
    pub async fn close(&self) -> Result<(), AppError> {
        if let Some(conn) = self.conn.get() {
            conn.close_by_ref().await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn returns_the_same_handle_for_sequential_callers() {
        let database = Database::new();

        let first = database.init("sqlite::memory:").await.unwrap();
        let second = database.handle().unwrap();

        assert!(std::ptr::eq(first, second));
    }

    #[tokio::test]
    async fn second_init_reuses_the_established_connection() {
        let database = Database::new();

        let first = database.init("sqlite::memory:").await.unwrap();
        // An unreachable URL would fail if a second handshake were attempted.
        let second = database.init("sqlite://does/not/exist").await.unwrap();

        assert!(std::ptr::eq(first, second));
    }

    #[tokio::test]
    async fn concurrent_first_callers_share_one_handle() {
        let database = Database::new();

        let (a, b, c) = tokio::join!(
            database.init("sqlite::memory:"),
            database.init("sqlite::memory:"),
            database.init("sqlite::memory:"),
        );

        let a = a.unwrap();
        let b = b.unwrap();
        let c = c.unwrap();

        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(b, c));
    }

    #[tokio::test]
    async fn handle_before_init_is_an_error() {
        let database = Database::new();

        assert!(matches!(
            database.handle(),
            Err(AppError::DatabaseNotInitialized)
        ));
    }

    #[tokio::test]
    async fn close_tears_down_an_initialized_connection() {
        let database = Database::new();

        database.init("sqlite::memory:").await.unwrap();
        database.close().await.unwrap();
    }
}
