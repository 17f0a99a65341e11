//! Goal CLI commands
//!
//! Sets monthly spending goals and shows progress against them. The month
//! defaults to the current calendar month when not given.

use clap::Subcommand;

use crate::display::format_progress;
use crate::error::{OutlayError, OutlayResult};
use crate::models::{Money, Month};
use crate::reports::GoalProgress;
use crate::storage::Database;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Set the spending goal for a month
    Set {
        /// Goal amount (e.g., "500" or "500.00")
        amount: String,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show goal progress for a month
    Show {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
}

fn parse_month(month: Option<String>) -> OutlayResult<Month> {
    match month {
        Some(s) => s.parse(),
        None => Ok(Month::current()),
    }
}

/// Handle a goal command
pub fn handle_goal_command(db: &Database, cmd: GoalCommands) -> OutlayResult<()> {
    let symbol = db.settings().currency_symbol()?;

    match cmd {
        GoalCommands::Set { amount, month } => {
            let month = parse_month(month)?;
            let amount = Money::parse(&amount)
                .map_err(|e| OutlayError::Validation(e.to_string()))?;
            if amount.is_negative() {
                return Err(OutlayError::Validation(
                    "Goal amount cannot be negative".into(),
                ));
            }

            db.goals().set(month, amount)?;
            println!(
                "Goal for {} set to {}",
                month,
                amount.format_with_symbol(&symbol)
            );
        }

        GoalCommands::Show { month } => {
            let month = parse_month(month)?;
            let goal = db.goals().get(month)?;
            let spent = db.expenses().total_for_month(month)?;
            let progress = GoalProgress::compute(goal, spent);
            print!("{}", format_progress(&progress, month, &symbol));
        }
    }

    Ok(())
}
