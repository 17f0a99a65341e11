//! Category CLI commands

use clap::Subcommand;

use crate::error::OutlayResult;
use crate::storage::Database;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(db: &Database, cmd: CategoryCommands) -> OutlayResult<()> {
    match cmd {
        CategoryCommands::List => {
            let categories = db.categories().list()?;
            if categories.is_empty() {
                println!("No categories defined.");
            } else {
                println!("Categories:");
                for name in categories {
                    println!("  - {}", name);
                }
            }
        }

        CategoryCommands::Add { name } => {
            db.categories().add(&name)?;
            println!("Added category: {}", name);
        }
    }

    Ok(())
}
