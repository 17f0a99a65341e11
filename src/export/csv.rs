//! CSV export
//!
//! Writes all recorded expenses to a CSV file for use in spreadsheets.

use std::path::Path;

use serde::Serialize;

use crate::error::{OutlayError, OutlayResult};
use crate::models::Expense;
use crate::storage::Database;

#[derive(Serialize)]
struct ExpenseRow<'a> {
    id: i64,
    date: String,
    amount: String,
    category: &'a str,
    note: &'a str,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id,
            date: expense.date.format("%Y-%m-%d").to_string(),
            amount: expense.amount.to_string(),
            category: &expense.category,
            note: expense.note.as_deref().unwrap_or(""),
        }
    }
}

/// Export all expenses to a CSV file, returning the row count
pub fn export_expenses(db: &Database, output: &Path) -> OutlayResult<usize> {
    let expenses = db.expenses().list_all()?;

    let mut writer = csv::Writer::from_path(output)
        .map_err(|e| OutlayError::Export(format!("Failed to create CSV file: {}", e)))?;

    for expense in &expenses {
        writer
            .serialize(ExpenseRow::from(expense))
            .map_err(|e| OutlayError::Export(format!("Failed to write CSV row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| OutlayError::Export(format!("Failed to flush CSV file: {}", e)))?;

    Ok(expenses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use crate::storage::test_util::test_database;

    #[test]
    fn test_export_writes_all_rows() {
        let (dir, db) = test_database();

        let first = NewExpense::parse("2024-01-15", "10.50", "Food", Some("lunch".into())).unwrap();
        let second = NewExpense::parse("2024-01-16", "5", "Travel", None).unwrap();
        db.expenses().add(&first).unwrap();
        db.expenses().add(&second).unwrap();

        let output = dir.path().join("expenses.csv");
        let count = export_expenses(&db, &output).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.starts_with("id,date,amount,category,note"));
        assert!(contents.contains("2024-01-15,10.50,Food,lunch"));
        assert!(contents.contains("2024-01-16,5.00,Travel,"));
    }

    #[test]
    fn test_export_empty_store() {
        let (dir, db) = test_database();
        let output = dir.path().join("expenses.csv");

        let count = export_expenses(&db, &output).unwrap();
        assert_eq!(count, 0);
        assert!(output.exists());
    }
}
