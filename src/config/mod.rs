use crate::core::period::RolloverPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::GroupPair;
use crate::models::group::DEFAULT_GROUPS;
use crate::utils::path::{expand_tilde, resolve_db_path};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Field names every config file is expected to carry.
const KNOWN_FIELDS: [&str; 4] = ["database", "groups", "persist_empty_rollover", "show_summary"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Exactly two labels, or empty for month-only rosters.
    #[serde(default = "default_groups")]
    pub groups: Vec<String>,
    #[serde(default = "default_true")]
    pub persist_empty_rollover: bool,
    #[serde(default = "default_true")]
    pub show_summary: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_groups() -> Vec<String> {
    DEFAULT_GROUPS.iter().map(|g| g.to_string()).collect()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            groups: default_groups(),
            persist_empty_rollover: true,
            show_summary: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rfarelog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rfarelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rfarelog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rfarelog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// The configured group pair, `None` in month-only mode.
    pub fn group_pair(&self) -> AppResult<Option<GroupPair>> {
        GroupPair::from_config(&self.groups)
    }

    pub fn rollover_policy(&self) -> RolloverPolicy {
        RolloverPolicy::from_flag(self.persist_empty_rollover)
    }

    /// Problems found in a raw config file: missing fields and invalid values.
    pub fn check_yaml(content: &str) -> Vec<String> {
        let mut issues = Vec::new();

        let value: Value = match serde_yaml::from_str(content) {
            Ok(v) => v,
            Err(e) => return vec![format!("not valid YAML: {e}")],
        };

        match value.as_mapping() {
            Some(map) => {
                for field in KNOWN_FIELDS {
                    if !map.contains_key(field) {
                        issues.push(format!("missing field '{field}' (default will be used)"));
                    }
                }
            }
            None => issues.push("top level is not a mapping".to_string()),
        }

        match Self::from_yaml(content) {
            Ok(cfg) => {
                if let Err(e) = cfg.group_pair() {
                    issues.push(e.to_string());
                }
            }
            Err(e) => issues.push(e.to_string()),
        }

        issues
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => resolve_db_path(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
