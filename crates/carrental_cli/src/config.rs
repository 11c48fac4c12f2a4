//! Fixed runtime settings for the console binary.
//!
//! # Invariants
//! - Nothing is read from the environment or the command line.
//! - `log_dir` is absolute, as `init_logging` requires.

use carrental_core::default_log_level;
use std::io;
use std::path::{Path, PathBuf};

const DB_FILE_NAME: &str = "main.db";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// SQLite file shared by every table, relative to the working directory.
    pub db_path: PathBuf,
    pub log_level: &'static str,
    pub log_dir: PathBuf,
}

impl CliConfig {
    /// Builds the default configuration rooted at `working_dir`.
    pub fn for_working_dir(working_dir: &Path) -> Self {
        Self {
            db_path: PathBuf::from(DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: working_dir.join(LOG_DIR_NAME),
        }
    }

    /// Builds the default configuration for the current working directory.
    pub fn load() -> io::Result<Self> {
        let working_dir = std::env::current_dir()?;
        Ok(Self::for_working_dir(&working_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::CliConfig;
    use std::path::Path;

    #[test]
    fn defaults_use_fixed_database_file_and_absolute_log_dir() {
        let config = CliConfig::for_working_dir(Path::new("/srv/rental"));
        assert_eq!(config.db_path, Path::new("main.db"));
        assert_eq!(config.log_dir, Path::new("/srv/rental/logs"));
        assert!(!config.log_level.is_empty());
    }
}
