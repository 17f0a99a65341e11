//! Aggregation and report export
//!
//! Pure computations over data already fetched from the repositories, plus
//! the two export paths: the SVG breakdown chart and the summary email.

pub mod chart;
pub mod email;
pub mod progress;

pub use chart::render_breakdown_chart;
pub use email::{send_summary_email, MonthSummary, SmtpCredentials};
pub use progress::{GoalProgress, ProgressBand};
