//! Settings repository
//!
//! A generic key/value store with upsert semantics. The one load-bearing
//! key is the currency display symbol; every formatting call site reads it
//! through this repository instead of ambient global state.

use rusqlite::{params, OptionalExtension};

use super::init::DEFAULT_CURRENCY_SYMBOL;
use super::Database;
use crate::error::OutlayResult;

/// Key under which the currency display symbol is stored
pub const CURRENCY_SYMBOL_KEY: &str = "currency_symbol";

/// Repository for global settings
pub struct SettingsRepository<'a> {
    db: &'a Database,
}

impl<'a> SettingsRepository<'a> {
    pub(crate) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Read a setting value; None when the key has never been set
    pub fn get(&self, key: &str) -> OutlayResult<Option<String>> {
        let conn = self.db.connect()?;
        let value = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Set or replace a setting value
    pub fn set(&self, key: &str, value: &str) -> OutlayResult<()> {
        let conn = self.db.connect()?;
        conn.execute(
            "REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// The active currency display symbol
    ///
    /// Falls back to the default for stores created before initialization
    /// seeded the key.
    pub fn currency_symbol(&self) -> OutlayResult<String> {
        Ok(self
            .get(CURRENCY_SYMBOL_KEY)?
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()))
    }
}
