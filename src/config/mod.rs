use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the records_<year>.txt files. Usually a clone
    /// of the user's records repository; "~" is expanded on use.
    pub records_dir: String,
    #[serde(default = "default_commit_prefix")]
    pub commit_prefix: String,
    #[serde(default = "default_cache_file")]
    pub cache_file: String,
    #[serde(default = "default_journal_file")]
    pub journal_file: String,
    /// Show "7월 3일 (금요일)" instead of the relative "3일 전" in lists.
    #[serde(default)]
    pub show_weekday: bool,
}

fn default_commit_prefix() -> String {
    "Update workout".to_string()
}

fn default_cache_file() -> String {
    Config::config_dir()
        .join("cache.json")
        .to_string_lossy()
        .to_string()
}

fn default_journal_file() -> String {
    Config::config_dir()
        .join("journal.log")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_dir: Self::config_dir()
                .join("records")
                .to_string_lossy()
                .to_string(),
            commit_prefix: default_commit_prefix(),
            cache_file: default_cache_file(),
            journal_file: default_journal_file(),
            show_weekday: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("gymlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".gymlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gymlog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// The records directory with "~" expanded.
    pub fn resolved_records_dir(&self) -> PathBuf {
        expand_tilde(&self.records_dir)
    }

    /// Initialize the configuration file and records directory.
    /// Returns the resolved records directory.
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Records dir: user provided or default
        let records_dir = if let Some(name) = custom_dir {
            let p = expand_tilde(&name);
            if p.is_absolute() {
                p
            } else {
                env::current_dir()?.join(p)
            }
        } else {
            dir.join("records")
        };

        let config = Config {
            records_dir: records_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create the records directory if not exists
        fs::create_dir_all(&records_dir)?;
        println!("✅ Records directory: {:?}", records_dir);

        Ok(records_dir)
    }
}
