//! Path management for Outlay
//!
//! Provides XDG-compliant path resolution for the database and report files.
//!
//! ## Path Resolution Order
//!
//! 1. `OUTLAY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_DATA_HOME/outlay` or `~/.local/share/outlay`
//! 3. Windows: `%APPDATA%\outlay`

use std::path::PathBuf;

use crate::error::OutlayError;

/// Manages all paths used by Outlay
#[derive(Debug, Clone)]
pub struct OutlayPaths {
    /// Base directory for all Outlay data
    base_dir: PathBuf,
}

impl OutlayPaths {
    /// Create a new OutlayPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, OutlayError> {
        let base_dir = if let Ok(custom) = std::env::var("OUTLAY_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create OutlayPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the reports directory (`<base>/reports/`)
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Get the path to the SQLite database file
    pub fn database_file(&self) -> PathBuf {
        self.data_dir().join("outlay.db")
    }

    /// Fixed, well-known location of the breakdown chart; each render
    /// overwrites the previous one.
    pub fn chart_file(&self) -> PathBuf {
        self.reports_dir().join("category_breakdown.svg")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), OutlayError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| OutlayError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| OutlayError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.reports_dir())
            .map_err(|e| OutlayError::Io(format!("Failed to create reports directory: {}", e)))?;

        Ok(())
    }

    /// Check if Outlay has been initialized (database file exists)
    pub fn is_initialized(&self) -> bool {
        self.database_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, OutlayError> {
    // Unix (Linux/macOS): Use XDG_DATA_HOME if set, otherwise ~/.local/share
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return Ok(PathBuf::from(xdg).join("outlay"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| OutlayError::Config("Could not determine home directory".into()))?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("outlay"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, OutlayError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| OutlayError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("outlay"))
}
