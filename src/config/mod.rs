use crate::errors::{AppError, AppResult};
use crate::logstore::DEFAULT_LOG_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "rtimetracker.conf";
const DATABASE_FILE_NAME: &str = "rtimetracker.sqlite";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where completed sessions are appended.
    #[serde(default = "default_save_location")]
    pub save_location: String,
    /// Audit log database; empty means next to the config file.
    #[serde(default)]
    pub database: String,
    /// Pause before the prompt shows up.
    #[serde(default = "default_startup_delay_ms")]
    pub startup_delay_ms: u64,
}

fn default_save_location() -> String {
    DEFAULT_LOG_FILE.to_string()
}
fn default_startup_delay_ms() -> u64 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_location: default_save_location(),
            database: Self::database_file().to_string_lossy().to_string(),
            startup_delay_ms: default_startup_delay_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let dir_name = if cfg!(target_os = "windows") {
            "rtimetracker"
        } else {
            ".rtimetracker"
        };
        base.unwrap_or_else(|| PathBuf::from(".")).join(dir_name)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    /// Return the default path of the audit database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE_NAME)
    }

    /// Load `path`, or defaults if it does not exist. Missing fields take
    /// their default, an empty `database` resolves next to `path`.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let mut cfg: Config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("cannot read {}: {}", path.display(), e))
            })?;
            serde_yaml::from_str(&content).map_err(|e| {
                AppError::Config(format!("cannot parse {}: {}", path.display(), e))
            })?
        } else {
            Config {
                database: String::new(),
                ..Config::default()
            }
        };

        if cfg.database.trim().is_empty() {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            cfg.database = dir.join(DATABASE_FILE_NAME).to_string_lossy().to_string();
        }

        Ok(cfg)
    }

    /// Write the configuration to `path`, creating its directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {}", e)))?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
