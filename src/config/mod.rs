use crate::core::validate::FleetPolicy;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: String,
    /// Audit log file; defaults to `<store>.log`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    #[serde(default = "default_fleets")]
    pub fleets: Vec<String>,
    #[serde(default)]
    pub restrict_fleets: bool,
    #[serde(default = "default_export_file")]
    pub export_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessConfig {
    #[serde(default)]
    pub users: Vec<Credential>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub user: String,
    pub password: String,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}
fn default_fleets() -> Vec<String> {
    ["230", "231", "232", "233"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_export_file() -> String {
    crate::export::DEFAULT_EXPORT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            log_file: None,
            fleets: default_fleets(),
            restrict_fleets: false,
            export_file: default_export_file(),
            access: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("horimetro")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".horimetro")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("horimetro.conf")
    }

    /// Default location of the record store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("horimetro_registros.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    pub fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(p) => expand_tilde(p),
            None => {
                let mut p = self.store_path().into_os_string();
                p.push(".log");
                PathBuf::from(p)
            }
        }
    }

    pub fn fleet_policy(&self) -> FleetPolicy {
        if self.restrict_fleets {
            FleetPolicy::Known(self.fleets.clone())
        } else {
            FleetPolicy::Any
        }
    }

    /// Write the configuration file (unless `is_test`) pointing at `store`.
    /// Relative store names are placed inside the configuration directory.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Self::default()
        };

        if let Some(name) = custom_store {
            let p = expand_tilde(&name);
            config.store = if p.is_absolute() {
                p.to_string_lossy().to_string()
            } else {
                dir.join(p).to_string_lossy().to_string()
            };
        }

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
