//! Expense repository
//!
//! CRUD and aggregation queries over the expenses table. Expenses are
//! immutable once written: the only mutation is deletion by id.

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension, Row};

use super::Database;
use crate::error::{OutlayError, OutlayResult};
use crate::models::{Expense, Money, Month, NewExpense};

/// Repository for expense records
pub struct ExpenseRepository<'a> {
    db: &'a Database,
}

impl<'a> ExpenseRepository<'a> {
    pub(crate) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a validated expense and return its assigned id
    ///
    /// Validation happens before any write: a non-positive amount is
    /// rejected without touching storage. The category is stored as given;
    /// it is deliberately not checked against the category table.
    pub fn add(&self, expense: &NewExpense) -> OutlayResult<i64> {
        if !expense.amount.is_positive() {
            return Err(OutlayError::Validation(
                "Amount must be a positive number".into(),
            ));
        }

        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO expenses (date, amount, category, note) VALUES (?1, ?2, ?3, ?4)",
            params![
                expense.date.format("%Y-%m-%d").to_string(),
                expense.amount.cents(),
                expense.category,
                expense.note,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All expenses, most recent date first
    pub fn list_all(&self) -> OutlayResult<Vec<Expense>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, amount, category, note FROM expenses ORDER BY date DESC",
        )?;
        let expenses = stmt
            .query_map([], row_to_expense)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(expenses)
    }

    /// Delete an expense by id
    ///
    /// Returns false when no such id exists; that is an outcome for the
    /// caller to interpret, not an error.
    pub fn delete(&self, id: i64) -> OutlayResult<bool> {
        let conn = self.db.connect()?;
        let removed = conn.execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    /// Expenses between two dates inclusive, oldest first
    ///
    /// The comparison runs on the stored `YYYY-MM-DD` text via BETWEEN;
    /// lexicographic order on that zero-padded fixed-width form is exactly
    /// chronological order, and this is relied upon.
    pub fn list_in_range(&self, start: NaiveDate, end: NaiveDate) -> OutlayResult<Vec<Expense>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, amount, category, note FROM expenses
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date ASC",
        )?;
        let expenses = stmt
            .query_map(
                params![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string(),
                ],
                row_to_expense,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(expenses)
    }

    /// Sum of all expenses in a month; zero when the month has none
    pub fn total_for_month(&self, month: Month) -> OutlayResult<Money> {
        let conn = self.db.connect()?;
        let cents: i64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM expenses WHERE substr(date, 1, 7) = ?1",
            params![month.key()],
            |row| row.get(0),
        )?;
        Ok(Money::from_cents(cents))
    }

    /// The single largest expense in a month, if any
    ///
    /// Equal amounts tie-break on id ascending so the result is stable.
    pub fn highest_for_month(&self, month: Month) -> OutlayResult<Option<Expense>> {
        let conn = self.db.connect()?;
        let expense = conn
            .query_row(
                "SELECT id, date, amount, category, note FROM expenses
                 WHERE substr(date, 1, 7) = ?1
                 ORDER BY amount DESC, id ASC
                 LIMIT 1",
                params![month.key()],
                row_to_expense,
            )
            .optional()?;
        Ok(expense)
    }

    /// Mean of per-day sums, counting only days that have expenses
    ///
    /// Zero when nothing is recorded. The SQL average is rounded to the
    /// nearest cent.
    pub fn average_daily(&self) -> OutlayResult<Money> {
        let conn = self.db.connect()?;
        let average: Option<f64> = conn.query_row(
            "SELECT AVG(daily_total) FROM
                 (SELECT SUM(amount) AS daily_total FROM expenses GROUP BY date)",
            [],
            |row| row.get(0),
        )?;
        Ok(Money::from_cents(average.map_or(0, |a| a.round() as i64)))
    }

    /// Total spent per category across all expenses, largest first
    ///
    /// Equal totals tie-break on category name so the order is stable.
    pub fn breakdown_by_category(&self) -> OutlayResult<Vec<(String, Money)>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT category, SUM(amount) AS total FROM expenses
             GROUP BY category
             ORDER BY total DESC, category ASC",
        )?;
        let breakdown = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, Money::from_cents(row.get(1)?)))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(breakdown)
    }
}

fn row_to_expense(row: &Row<'_>) -> rusqlite::Result<Expense> {
    let date_str: String = row.get(1)?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Expense {
        id: row.get(0)?,
        date,
        amount: Money::from_cents(row.get(2)?),
        category: row.get(3)?,
        note: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_util::test_database;

    fn add(db: &Database, date: &str, amount: &str, category: &str) -> i64 {
        let expense = NewExpense::parse(date, amount, category, None).unwrap();
        db.expenses().add(&expense).unwrap()
    }

    #[test]
    fn test_add_then_list_contains_record() {
        let (_dir, db) = test_database();

        let id = add(&db, "2024-01-15", "10.50", "Food");

        let all = db.expenses().list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].amount, Money::from_cents(1050));
        assert_eq!(all[0].category, "Food");

        let total = db
            .expenses()
            .total_for_month("2024-01".parse().unwrap())
            .unwrap();
        assert_eq!(total, Money::from_cents(1050));
    }

    #[test]
    fn test_ids_are_monotonic() {
        let (_dir, db) = test_database();

        let first = add(&db, "2024-01-01", "1", "Misc");
        let second = add(&db, "2024-01-02", "2", "Misc");
        assert!(second > first);
    }

    #[test]
    fn test_list_all_date_descending() {
        let (_dir, db) = test_database();

        add(&db, "2024-01-10", "5", "Food");
        add(&db, "2024-03-01", "5", "Food");
        add(&db, "2024-02-20", "5", "Food");

        let dates: Vec<String> = db
            .expenses()
            .list_all()
            .unwrap()
            .iter()
            .map(|e| e.date.to_string())
            .collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-02-20", "2024-01-10"]);
    }

    #[test]
    fn test_delete() {
        let (_dir, db) = test_database();

        let id = add(&db, "2024-01-15", "10", "Food");
        assert!(db.expenses().delete(id).unwrap());
        assert!(db.expenses().list_all().unwrap().is_empty());

        // Deleting an id that was never issued is not an error
        assert!(!db.expenses().delete(9999).unwrap());
    }

    #[test]
    fn test_add_rejects_without_writing() {
        let (_dir, db) = test_database();

        let mut expense = NewExpense::parse("2024-01-15", "10", "Food", None).unwrap();
        expense.amount = Money::from_cents(-100);

        assert!(db.expenses().add(&expense).is_err());
        assert!(db.expenses().list_all().unwrap().is_empty());
    }

    #[test]
    fn test_list_in_range_inclusive_bounds() {
        let (_dir, db) = test_database();

        add(&db, "2023-12-31", "1", "Food");
        add(&db, "2024-01-01", "2", "Food");
        add(&db, "2024-01-31", "3", "Food");
        add(&db, "2024-02-01", "4", "Food");

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let in_range = db.expenses().list_in_range(start, end).unwrap();

        let dates: Vec<String> = in_range.iter().map(|e| e.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-31"]);
    }

    #[test]
    fn test_total_for_month_empty_is_zero() {
        let (_dir, db) = test_database();
        let total = db
            .expenses()
            .total_for_month("2024-06".parse().unwrap())
            .unwrap();
        assert_eq!(total, Money::zero());
    }

    #[test]
    fn test_highest_for_month() {
        let (_dir, db) = test_database();

        add(&db, "2024-01-05", "10", "Food");
        let big = add(&db, "2024-01-10", "99.99", "Travel");
        add(&db, "2024-02-01", "500", "Bills");

        let month: Month = "2024-01".parse().unwrap();
        let highest = db.expenses().highest_for_month(month).unwrap().unwrap();
        assert_eq!(highest.id, big);
        assert_eq!(highest.category, "Travel");

        let empty: Month = "2024-06".parse().unwrap();
        assert!(db.expenses().highest_for_month(empty).unwrap().is_none());
    }

    #[test]
    fn test_highest_tie_breaks_on_id() {
        let (_dir, db) = test_database();

        let first = add(&db, "2024-01-05", "10", "Food");
        add(&db, "2024-01-06", "10", "Travel");

        let month: Month = "2024-01".parse().unwrap();
        let highest = db.expenses().highest_for_month(month).unwrap().unwrap();
        assert_eq!(highest.id, first);
    }

    #[test]
    fn test_average_daily_counts_only_days_with_expenses() {
        let (_dir, db) = test_database();

        // Day A: 10. Day B: 4 + 6. Average of day sums = (10 + 10) / 2.
        add(&db, "2024-01-01", "10", "Food");
        add(&db, "2024-01-02", "4", "Food");
        add(&db, "2024-01-02", "6", "Travel");

        let average = db.expenses().average_daily().unwrap();
        assert_eq!(average, Money::from_cents(1000));
    }

    #[test]
    fn test_average_daily_empty_is_zero() {
        let (_dir, db) = test_database();
        assert_eq!(db.expenses().average_daily().unwrap(), Money::zero());
    }

    #[test]
    fn test_breakdown_descending_by_total() {
        let (_dir, db) = test_database();

        add(&db, "2024-01-01", "10", "Food");
        add(&db, "2024-01-02", "20", "Food");
        add(&db, "2024-01-03", "5", "Travel");

        let breakdown = db.expenses().breakdown_by_category().unwrap();
        assert_eq!(
            breakdown,
            vec![
                ("Food".to_string(), Money::from_cents(3000)),
                ("Travel".to_string(), Money::from_cents(500)),
            ]
        );
    }

    #[test]
    fn test_category_not_checked_against_category_table() {
        let (_dir, db) = test_database();

        // "Gadgets" is not in the seeded category set; the write succeeds
        let id = add(&db, "2024-01-01", "10", "Gadgets");
        assert!(id > 0);
    }
}
