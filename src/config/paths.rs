//! Path management for fintrack
//!
//! Resolves where the database lives. Resolution order:
//!
//! 1. `FINTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform data directory (e.g. `~/.local/share/fintrack` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinanceError;

/// Manages all paths used by fintrack
#[derive(Debug, Clone)]
pub struct FintrackPaths {
    base_dir: PathBuf,
}

impl FintrackPaths {
    /// Create a new FintrackPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// environment override is not set.
    pub fn new() -> Result<Self, FinanceError> {
        let base_dir = match std::env::var("FINTRACK_DATA_DIR") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => ProjectDirs::from("", "", "fintrack")
                .ok_or_else(|| {
                    FinanceError::Config("could not determine a data directory".into())
                })?
                .data_dir()
                .to_path_buf(),
        };

        Ok(Self { base_dir })
    }

    /// Create FintrackPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base directory holding all fintrack data
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the SQLite database file
    pub fn db_file(&self) -> PathBuf {
        self.base_dir.join("fintrack.db")
    }

    /// Create the base directory if it does not exist yet
    pub fn ensure_directories(&self) -> Result<(), FinanceError> {
        std::fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), &temp_dir.path().to_path_buf());
        assert_eq!(paths.db_file(), temp_dir.path().join("fintrack.db"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("data");
        let paths = FintrackPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.is_dir());
    }
}
