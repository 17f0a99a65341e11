//! Goal repository
//!
//! At most one spending goal per month, upserted by REPLACE. A month with
//! no stored goal reads back as zero.

use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::OutlayResult;
use crate::models::{Money, Month};

/// Repository for monthly spending goals
pub struct GoalRepository<'a> {
    db: &'a Database,
}

impl<'a> GoalRepository<'a> {
    pub(crate) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Set or replace the goal for a month
    ///
    /// The store does not reject negative amounts; callers are expected to
    /// validate non-negativity before calling (front ends do).
    pub fn set(&self, month: Month, amount: Money) -> OutlayResult<()> {
        let conn = self.db.connect()?;
        conn.execute(
            "REPLACE INTO goals (month, goal) VALUES (?1, ?2)",
            params![month.key(), amount.cents()],
        )?;
        Ok(())
    }

    /// The goal for a month, defaulting to zero when unset
    pub fn get(&self, month: Month) -> OutlayResult<Money> {
        let conn = self.db.connect()?;
        let cents: Option<i64> = conn
            .query_row(
                "SELECT goal FROM goals WHERE month = ?1",
                params![month.key()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(Money::from_cents(cents.unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_util::test_database;

    #[test]
    fn test_unset_goal_is_zero() {
        let (_dir, db) = test_database();
        let month: Month = "2024-01".parse().unwrap();
        assert_eq!(db.goals().get(month).unwrap(), Money::zero());
    }

    #[test]
    fn test_set_then_get() {
        let (_dir, db) = test_database();
        let month: Month = "2024-01".parse().unwrap();

        db.goals().set(month, Money::from_cents(50_000)).unwrap();
        assert_eq!(db.goals().get(month).unwrap(), Money::from_cents(50_000));
    }

    #[test]
    fn test_set_replaces_prior_value() {
        let (_dir, db) = test_database();
        let month: Month = "2024-01".parse().unwrap();

        db.goals().set(month, Money::from_cents(50_000)).unwrap();
        db.goals().set(month, Money::from_cents(75_000)).unwrap();

        assert_eq!(db.goals().get(month).unwrap(), Money::from_cents(75_000));
    }

    #[test]
    fn test_goals_are_per_month() {
        let (_dir, db) = test_database();
        let january: Month = "2024-01".parse().unwrap();
        let february: Month = "2024-02".parse().unwrap();

        db.goals().set(january, Money::from_cents(10_000)).unwrap();

        assert_eq!(db.goals().get(february).unwrap(), Money::zero());
    }
}
