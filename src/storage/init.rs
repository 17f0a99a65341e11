//! Storage initialization
//!
//! Creates the schema and seeds default data. Safe to call on every
//! startup: tables are created only if missing, the currency setting is
//! seeded with INSERT OR IGNORE, and default categories are inserted only
//! when the category table is empty.

use rusqlite::params;

use super::Database;
use crate::error::{OutlayError, OutlayResult};

/// Categories seeded into a fresh store
pub const DEFAULT_CATEGORIES: [&str; 5] = ["Food", "Travel", "Shopping", "Bills", "Misc"];

/// Default currency display symbol
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Initialize the store: create tables if missing and seed defaults once
///
/// # Errors
///
/// Returns `StorageUnavailable` when the database file cannot be created
/// or opened; this is fatal and should abort startup.
pub fn initialize(db: &Database) -> OutlayResult<()> {
    let mut conn = db.connect().map_err(|e| match e {
        OutlayError::Storage(msg) => OutlayError::StorageUnavailable(msg),
        other => other,
    })?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            amount INTEGER NOT NULL,
            category TEXT NOT NULL,
            note TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS categories (
            name TEXT PRIMARY KEY
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS goals (
            month TEXT PRIMARY KEY,
            goal INTEGER NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT
        )",
        [],
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO settings (key, value) VALUES ('currency_symbol', ?1)",
        params![DEFAULT_CURRENCY_SYMBOL],
    )?;

    // Seed defaults only into an empty category table, so the seed runs
    // exactly once per store. The inserts commit as one transaction: the
    // COUNT guard cannot cope with a partially seeded table.
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
    if count == 0 {
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO categories (name) VALUES (?1)")?;
            for name in DEFAULT_CATEGORIES {
                stmt.execute(params![name])?;
            }
        }
        tx.commit()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_tables_and_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("outlay.db"));

        initialize(&db).unwrap();

        let categories = db.categories().list().unwrap();
        assert_eq!(categories.len(), 5);
        assert!(categories.contains(&"Food".to_string()));

        let symbol = db.settings().get("currency_symbol").unwrap();
        assert_eq!(symbol.as_deref(), Some("$"));
    }

    #[test]
    fn test_seed_is_all_or_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("outlay.db"));

        initialize(&db).unwrap();

        // The seed commits as one unit: every default is present, each once
        let mut expected: Vec<String> =
            DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(db.categories().list().unwrap(), expected);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("outlay.db"));

        initialize(&db).unwrap();
        initialize(&db).unwrap();

        // No duplicate seeding on repeated startup
        let categories = db.categories().list().unwrap();
        assert_eq!(categories.len(), 5);
    }

    #[test]
    fn test_initialize_preserves_user_data() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("outlay.db"));

        initialize(&db).unwrap();
        db.categories().add("Health").unwrap();
        db.settings().set("currency_symbol", "€").unwrap();

        initialize(&db).unwrap();

        let categories = db.categories().list().unwrap();
        assert_eq!(categories.len(), 6);
        // INSERT OR IGNORE must not clobber a user-chosen symbol
        let symbol = db.settings().get("currency_symbol").unwrap();
        assert_eq!(symbol.as_deref(), Some("€"));
    }

    #[test]
    fn test_initialize_fails_on_unusable_path() {
        // A directory cannot be opened as a database file
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path());

        let err = initialize(&db).unwrap_err();
        assert!(matches!(err, OutlayError::StorageUnavailable(_)));
    }
}
