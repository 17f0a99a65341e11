//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing, deleting, and exporting
//! expenses.

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::format_expense_table;
use crate::error::{OutlayError, OutlayResult};
use crate::export::export_expenses;
use crate::models::{parse_date, Money, NewExpense};
use crate::storage::Database;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Expense date (YYYY-MM-DD)
        date: String,
        /// Amount (e.g., "10.50" or "10")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category name
        category: String,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List all expenses, most recent first
    List,

    /// Delete an expense by id
    Delete {
        /// Expense id
        id: i64,
    },

    /// List expenses between two dates (inclusive)
    Range {
        /// Start date (YYYY-MM-DD)
        start: String,
        /// End date (YYYY-MM-DD)
        end: String,
    },

    /// Export all expenses to a CSV file
    Export {
        /// Output file path
        #[arg(short, long, default_value = "expenses.csv")]
        output: PathBuf,
    },
}

/// Handle an expense command
pub fn handle_expense_command(db: &Database, cmd: ExpenseCommands) -> OutlayResult<()> {
    let symbol = db.settings().currency_symbol()?;

    match cmd {
        ExpenseCommands::Add {
            date,
            amount,
            category,
            note,
        } => {
            let expense = NewExpense::parse(&date, &amount, category, note)?;
            let id = db.expenses().add(&expense)?;
            println!(
                "Recorded expense #{}: {} on {} ({})",
                id,
                expense.amount.format_with_symbol(&symbol),
                expense.date.format("%Y-%m-%d"),
                expense.category
            );
        }

        ExpenseCommands::List => {
            let expenses = db.expenses().list_all()?;
            print!("{}", format_expense_table(&expenses, &symbol));
        }

        ExpenseCommands::Delete { id } => {
            if db.expenses().delete(id)? {
                println!("Deleted expense #{}", id);
            } else {
                return Err(OutlayError::expense_not_found(id.to_string()));
            }
        }

        ExpenseCommands::Range { start, end } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            if end < start {
                return Err(OutlayError::Validation(
                    "End date must not be before start date".into(),
                ));
            }

            let expenses = db.expenses().list_in_range(start, end)?;
            print!("{}", format_expense_table(&expenses, &symbol));

            if !expenses.is_empty() {
                let total: Money = expenses.iter().map(|e| e.amount).sum();
                println!(
                    "Total for {} to {}: {}",
                    start.format("%Y-%m-%d"),
                    end.format("%Y-%m-%d"),
                    total.format_with_symbol(&symbol)
                );
            }
        }

        ExpenseCommands::Export { output } => {
            let count = export_expenses(db, &output)?;
            println!("Exported {} expenses to {}", count, output.display());
        }
    }

    Ok(())
}
