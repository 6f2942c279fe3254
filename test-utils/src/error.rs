use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database error during test setup.
    ///
    /// Failed to connect to the in-memory SQLite database or to create the
    /// configured tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
