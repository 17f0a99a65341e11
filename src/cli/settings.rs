//! Currency CLI commands

use clap::Subcommand;

use crate::error::{OutlayError, OutlayResult};
use crate::storage::settings::CURRENCY_SYMBOL_KEY;
use crate::storage::Database;

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// Show the active currency symbol
    Show,

    /// Set the currency display symbol
    Set {
        /// Symbol to use (e.g., "$", "€", "₹")
        symbol: String,
    },
}

/// Handle a currency command
pub fn handle_currency_command(db: &Database, cmd: CurrencyCommands) -> OutlayResult<()> {
    match cmd {
        CurrencyCommands::Show => {
            println!("Currency symbol: {}", db.settings().currency_symbol()?);
        }

        CurrencyCommands::Set { symbol } => {
            if symbol.trim().is_empty() {
                return Err(OutlayError::Validation(
                    "Currency symbol cannot be empty".into(),
                ));
            }
            db.settings().set(CURRENCY_SYMBOL_KEY, &symbol)?;
            println!("Currency symbol set to {}", symbol);
        }
    }

    Ok(())
}
