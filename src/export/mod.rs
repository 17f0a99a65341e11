//! Data export

pub mod csv;

pub use csv::export_expenses;
