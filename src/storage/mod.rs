//! Storage layer for Outlay
//!
//! A SQLite store with four tables: expenses, categories, goals, and
//! settings. Every repository call opens a connection, runs one statement
//! (or a short fixed sequence), and closes; no connection or transaction
//! spans user actions. The design assumes a single active user process.

pub mod categories;
pub mod expenses;
pub mod goals;
pub mod init;
pub mod settings;

pub use categories::CategoryRepository;
pub use expenses::ExpenseRepository;
pub use goals::GoalRepository;
pub use init::initialize;
pub use settings::SettingsRepository;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::{OutlayError, OutlayResult};

/// Handle to the on-disk store; hands out short-lived connections
/// and access to the per-table repositories.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    /// Create a handle for the database at `path` (nothing is opened yet)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The database file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection for a single operation
    pub(crate) fn connect(&self) -> OutlayResult<Connection> {
        Connection::open(&self.path).map_err(|e| OutlayError::Storage(e.to_string()))
    }

    /// Expense repository
    pub fn expenses(&self) -> ExpenseRepository<'_> {
        ExpenseRepository::new(self)
    }

    /// Category repository
    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(self)
    }

    /// Goal repository
    pub fn goals(&self) -> GoalRepository<'_> {
        GoalRepository::new(self)
    }

    /// Settings repository
    pub fn settings(&self) -> SettingsRepository<'_> {
        SettingsRepository::new(self)
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::Database;
    use tempfile::TempDir;

    /// An initialized database backed by a temporary directory.
    /// The TempDir must be kept alive for the duration of the test.
    pub fn test_database() -> (TempDir, Database) {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("outlay.db"));
        super::initialize(&db).unwrap();
        (temp_dir, db)
    }
}
