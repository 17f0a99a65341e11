//! Month key type
//!
//! Goals and monthly aggregates are keyed by calendar month in `YYYY-MM`
//! form. The zero-padded fixed-width format makes lexicographic comparison
//! on the stored text equivalent to chronological order.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::OutlayError;

/// A calendar month (year + month), the key for goals and monthly totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, OutlayError> {
        if !(1..=12).contains(&month) {
            return Err(OutlayError::Validation(format!(
                "Invalid month number: {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month a given date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current calendar month (local time)
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    /// The `YYYY-MM` storage key for this month
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = OutlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || OutlayError::Validation(format!("Invalid month (expected YYYY-MM): {}", s));

        let (year_str, month_str) = s.split_once('-').ok_or_else(invalid)?;
        if year_str.len() != 4 || month_str.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}
