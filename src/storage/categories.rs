//! Category repository
//!
//! The category vocabulary is a flat list of unique names. Categories can
//! be listed and added; there is no delete operation. Expenses reference
//! categories by name without enforcement, so the list is a suggestion
//! set for input surfaces rather than a constraint.

use rusqlite::params;

use super::Database;
use crate::error::{OutlayError, OutlayResult};

/// Repository for the category vocabulary
pub struct CategoryRepository<'a> {
    db: &'a Database,
}

impl<'a> CategoryRepository<'a> {
    pub(crate) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All category names, ascending lexicographic
    pub fn list(&self) -> OutlayResult<Vec<String>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare("SELECT name FROM categories ORDER BY name")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// Add a new category
    ///
    /// Empty or whitespace-only names are rejected locally before any
    /// write. A uniqueness violation is surfaced as a distinct
    /// "already exists" outcome rather than a generic storage failure.
    pub fn add(&self, name: &str) -> OutlayResult<()> {
        if name.trim().is_empty() {
            return Err(OutlayError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        let conn = self.db.connect()?;
        match conn.execute("INSERT INTO categories (name) VALUES (?1)", params![name]) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(OutlayError::category_exists(name))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_util::test_database;

    #[test]
    fn test_list_is_sorted() {
        let (_dir, db) = test_database();

        db.categories().add("Aardvark Care").unwrap();

        let names = db.categories().list().unwrap();
        assert_eq!(names[0], "Aardvark Care");
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_add_duplicate_is_distinct_error() {
        let (_dir, db) = test_database();

        // "Food" is seeded by default
        let err = db.categories().add("Food").unwrap_err();
        assert!(err.is_duplicate());

        // Exactly one "Food" survives
        let food_count = db
            .categories()
            .list()
            .unwrap()
            .iter()
            .filter(|n| n.as_str() == "Food")
            .count();
        assert_eq!(food_count, 1);
    }

    #[test]
    fn test_add_rejects_blank_names() {
        let (_dir, db) = test_database();

        assert!(db.categories().add("").unwrap_err().is_validation());
        assert!(db.categories().add("   ").unwrap_err().is_validation());
    }
}
