//! Report CLI commands
//!
//! Aggregation reports over recorded expenses, the SVG chart export, and
//! the monthly summary email.

use clap::Subcommand;

use crate::config::OutlayPaths;
use crate::display::format_breakdown;
use crate::error::{EmailFailure, OutlayResult};
use crate::models::Month;
use crate::reports::{render_breakdown_chart, send_summary_email, MonthSummary, SmtpCredentials};
use crate::storage::Database;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Total spent in a month
    Total {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// The single largest expense in a month
    Highest {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Average spending per day, counting only days with expenses
    Average,

    /// Total spent per category across all expenses
    Breakdown,

    /// Render the category breakdown as an SVG bar chart
    Chart,

    /// Email the current month's summary with the chart attached
    Email {
        /// Recipient address
        #[arg(long)]
        to: String,
        /// Sender address (SMTP login)
        #[arg(long = "from")]
        sender: String,
    },
}

fn parse_month(month: Option<String>) -> OutlayResult<Month> {
    match month {
        Some(s) => s.parse(),
        None => Ok(Month::current()),
    }
}

/// Handle a report command
pub fn handle_report_command(
    db: &Database,
    paths: &OutlayPaths,
    cmd: ReportCommands,
) -> OutlayResult<()> {
    let symbol = db.settings().currency_symbol()?;

    match cmd {
        ReportCommands::Total { month } => {
            let month = parse_month(month)?;
            let total = db.expenses().total_for_month(month)?;
            println!(
                "Total for {}: {}",
                month,
                total.format_with_symbol(&symbol)
            );
        }

        ReportCommands::Highest { month } => {
            let month = parse_month(month)?;
            match db.expenses().highest_for_month(month)? {
                Some(expense) => {
                    println!(
                        "Highest expense in {}: {} on {} ({}){}",
                        month,
                        expense.amount.format_with_symbol(&symbol),
                        expense.date.format("%Y-%m-%d"),
                        expense.category,
                        expense
                            .note
                            .as_deref()
                            .map(|n| format!(" - {}", n))
                            .unwrap_or_default()
                    );
                }
                None => println!("No expenses recorded in {}.", month),
            }
        }

        ReportCommands::Average => {
            let average = db.expenses().average_daily()?;
            println!(
                "Average daily spending: {}",
                average.format_with_symbol(&symbol)
            );
        }

        ReportCommands::Breakdown => {
            let breakdown = db.expenses().breakdown_by_category()?;
            print!("{}", format_breakdown(&breakdown, &symbol));
        }

        ReportCommands::Chart => {
            let breakdown = db.expenses().breakdown_by_category()?;
            match render_breakdown_chart(&breakdown, &symbol, &paths.chart_file())? {
                Some(path) => println!("Chart saved to {}", path.display()),
                None => println!("No expense data to chart."),
            }
        }

        ReportCommands::Email { to, sender } => {
            let month = Month::current();
            let total = db.expenses().total_for_month(month)?;

            // The attachment always reflects the latest data
            let breakdown = db.expenses().breakdown_by_category()?;
            let chart_path = render_breakdown_chart(&breakdown, &symbol, &paths.chart_file())?
                .ok_or(EmailFailure::ChartMissing)?;

            let password = rpassword::prompt_password("App password: ")?;
            let credentials = SmtpCredentials { sender, password };
            let summary = MonthSummary {
                month,
                total,
                currency_symbol: symbol,
            };

            send_summary_email(&credentials, &to, &chart_path, &summary)?;
            println!("Summary for {} sent to {}", month, to);
        }
    }

    Ok(())
}
