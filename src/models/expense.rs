//! Expense model
//!
//! An expense is a single dated monetary outflow with a category and an
//! optional note. Expenses are never mutated after creation; they can only
//! be deleted by id.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::money::Money;
use crate::error::{OutlayError, OutlayResult};

/// A recorded expense
#[derive(Debug, Clone, Serialize)]
pub struct Expense {
    /// Unique identifier, assigned by the store (monotonic)
    pub id: i64,

    /// Expense date (calendar date, no time component)
    pub date: NaiveDate,

    /// Amount spent; always positive
    pub amount: Money,

    /// Category name. Referenced by value: the category set is a suggestion
    /// list, not a constraint, so this is never checked against it.
    pub category: String,

    /// Optional free-text note
    pub note: Option<String>,
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.category
        )
    }
}

/// Input for a new expense, validated before it ever touches storage
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub amount: Money,
    pub category: String,
    pub note: Option<String>,
}

impl NewExpense {
    /// Validate and build a new expense from typed parts
    ///
    /// Rejects non-positive amounts. The category is accepted as given.
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        note: Option<String>,
    ) -> OutlayResult<Self> {
        if !amount.is_positive() {
            return Err(OutlayError::Validation(
                "Amount must be a positive number".into(),
            ));
        }

        Ok(Self {
            date,
            amount,
            category: category.into(),
            note: note.filter(|n| !n.trim().is_empty()),
        })
    }

    /// Parse and validate user-supplied strings (CLI input path)
    ///
    /// The date must be a real calendar date in `YYYY-MM-DD` form.
    pub fn parse(
        date: &str,
        amount: &str,
        category: impl Into<String>,
        note: Option<String>,
    ) -> OutlayResult<Self> {
        let date = parse_date(date)?;
        let amount = Money::parse(amount)
            .map_err(|e| OutlayError::Validation(e.to_string()))?;
        Self::new(date, amount, category, note)
    }
}

/// Parse a `YYYY-MM-DD` date, rejecting anything that is not a real
/// calendar date in that exact form.
pub fn parse_date(s: &str) -> OutlayResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| OutlayError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}
