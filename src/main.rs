use anyhow::Result;
use clap::{Parser, Subcommand};

use outlay::cli::{
    handle_category_command, handle_currency_command, handle_expense_command, handle_goal_command,
    handle_report_command, CategoryCommands, CurrencyCommands, ExpenseCommands, GoalCommands,
    ReportCommands,
};
use outlay::config::OutlayPaths;
use outlay::storage::{self, Database};

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Outlay is a terminal-based personal expense tracker. It records \
                  dated expenses against categories, tracks monthly spending goals, \
                  and produces totals, breakdowns, charts, and email summaries."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense recording and listing commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Monthly goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Reports, charts, and email summaries
    #[command(subcommand)]
    Report(ReportCommands),

    /// Currency symbol commands
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Initialize the data store
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = OutlayPaths::new()?;
    paths.ensure_directories()?;

    let db = Database::new(paths.database_file());
    storage::initialize(&db)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&db, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&db, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&db, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&db, &paths, cmd)?;
        }
        Some(Commands::Currency(cmd)) => {
            handle_currency_command(&db, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initialized Outlay at: {}", paths.base_dir().display());
            println!("Database: {}", paths.database_file().display());
            println!();
            println!("Default categories have been created:");
            println!("  Food, Travel, Shopping, Bills, Misc");
            println!();
            println!("Run 'outlay expense add <date> <amount> <category>' to record an expense.");
        }
        Some(Commands::Config) => {
            println!("Outlay Configuration");
            println!("====================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Database file:     {}", paths.database_file().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!(
                "Currency symbol:   {}",
                db.settings().currency_symbol()?
            );
        }
        None => {
            println!("Outlay - Terminal-based personal expense tracker");
            println!();
            println!("Run 'outlay --help' for usage information.");
            println!("Run 'outlay expense list' to see recorded expenses.");
        }
    }

    Ok(())
}
