//! Terminal display formatting
//!
//! Formats records and reports for the CLI. Every amount is rendered with
//! the active currency symbol supplied by the caller, so formatting stays
//! testable without storage access.

use crate::models::{Expense, Money, Month};
use crate::reports::GoalProgress;

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense, symbol: &str) -> String {
    format!(
        "{:<6} {:<12} {:>12} {:<15} {}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        expense.amount.format_with_symbol(symbol),
        expense.category,
        expense.note.as_deref().unwrap_or(""),
    )
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses logged yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<6} {:<12} {:>12} {:<15} {}\n",
        "ID", "Date", "Amount", "Category", "Note"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol));
        output.push('\n');
    }

    output
}

/// Format the category breakdown
pub fn format_breakdown(breakdown: &[(String, Money)], symbol: &str) -> String {
    if breakdown.is_empty() {
        return "No expense data to break down.\n".to_string();
    }

    let mut output = String::new();
    for (category, total) in breakdown {
        output.push_str(&format!(
            "- {}: {}\n",
            category,
            total.format_with_symbol(symbol)
        ));
    }
    output
}

/// Format goal progress for a month
pub fn format_progress(progress: &GoalProgress, month: Month, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Month:  {}\n", month));
    output.push_str(&format!(
        "Goal:   {}\n",
        progress.goal.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Spent:  {}\n",
        progress.spent.format_with_symbol(symbol)
    ));

    if progress.goal.is_zero() {
        output.push_str("Status: No goal set. Set a goal to see your status.\n");
    } else {
        let remaining = progress.remaining();
        if remaining.is_negative() {
            output.push_str(&format!(
                "You are {} over budget.\n",
                remaining.abs().format_with_symbol(symbol)
            ));
        } else {
            output.push_str(&format!(
                "Remaining budget: {}\n",
                remaining.format_with_symbol(symbol)
            ));
        }
        output.push_str(&format!(
            "Status: {} ({:.0}%)\n",
            progress.band,
            progress.percent()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(id: i64, date: &str, cents: i64, category: &str, note: Option<&str>) -> Expense {
        Expense {
            id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount: Money::from_cents(cents),
            category: category.to_string(),
            note: note.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$"), "No expenses logged yet.\n");
    }

    #[test]
    fn test_table_contains_fields() {
        let expenses = vec![expense(1, "2024-01-15", 1050, "Food", Some("lunch"))];
        let table = format_expense_table(&expenses, "$");
        assert!(table.contains("2024-01-15"));
        assert!(table.contains("$10.50"));
        assert!(table.contains("Food"));
        assert!(table.contains("lunch"));
    }

    #[test]
    fn test_breakdown_lines() {
        let breakdown = vec![
            ("Food".to_string(), Money::from_cents(3000)),
            ("Travel".to_string(), Money::from_cents(500)),
        ];
        let output = format_breakdown(&breakdown, "€");
        assert_eq!(output, "- Food: €30.00\n- Travel: €5.00\n");
    }

    #[test]
    fn test_progress_no_goal() {
        let progress = GoalProgress::compute(Money::zero(), Money::from_cents(1000));
        let output = format_progress(&progress, "2024-01".parse().unwrap(), "$");
        assert!(output.contains("No goal set"));
    }

    #[test]
    fn test_progress_over_budget() {
        let progress =
            GoalProgress::compute(Money::from_cents(10_000), Money::from_cents(11_000));
        let output = format_progress(&progress, "2024-01".parse().unwrap(), "$");
        assert!(output.contains("You are $10.00 over budget."));
        assert!(output.contains("Over budget"));
    }
}
