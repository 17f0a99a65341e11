//! Core data models

pub mod expense;
pub mod money;
pub mod month;

pub use expense::{parse_date, Expense, NewExpense};
pub use money::Money;
pub use month::Month;
