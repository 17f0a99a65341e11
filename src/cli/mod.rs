//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the storage and report layers.

pub mod category;
pub mod expense;
pub mod goal;
pub mod report;
pub mod settings;

pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_report_command, ReportCommands};
pub use settings::{handle_currency_command, CurrencyCommands};
