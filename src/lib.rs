//! Outlay - Personal expense tracker for the terminal
//!
//! This library provides the core functionality for the Outlay expense
//! tracker. Expenses, categories, monthly goals, and settings live in a
//! single SQLite database; reports aggregate over them and can be exported
//! as a chart or mailed as a monthly summary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the database and report files
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, months)
//! - `storage`: SQLite storage layer with per-table repositories
//! - `reports`: Aggregation, chart rendering, and the summary email
//! - `export`: CSV export
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers bridging clap to the layers above
//!
//! # Example
//!
//! ```rust,ignore
//! use outlay::config::OutlayPaths;
//! use outlay::storage::{self, Database};
//!
//! let paths = OutlayPaths::new()?;
//! paths.ensure_directories()?;
//! let db = Database::new(paths.database_file());
//! storage::initialize(&db)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::OutlayError;
