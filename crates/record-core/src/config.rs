use crate::error::{RecordError, Result};
use crate::paths;
use crate::store::sheets::DEFAULT_API_BASE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// StoreBackend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreBackend {
    Memory,
    Redb {
        #[serde(default = "default_db_path")]
        path: PathBuf,
    },
    Sheets {
        spreadsheet_id: String,
        #[serde(default = "default_sheet")]
        sheet: String,
        #[serde(default = "default_token_env")]
        token_env: String,
        #[serde(default = "default_api_base")]
        api_base: String,
    },
}

fn default_db_path() -> PathBuf {
    PathBuf::from(paths::DB_FILE)
}

fn default_sheet() -> String {
    "Sheet1".to_string()
}

fn default_token_env() -> String {
    "RECORD_SHEETS_TOKEN".to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for StoreBackend {
    fn default() -> Self {
        StoreBackend::Redb {
            path: default_db_path(),
        }
    }
}

impl StoreBackend {
    /// Sheets backend with default sheet name, token variable and API base.
    pub fn sheets(spreadsheet_id: impl Into<String>) -> Self {
        StoreBackend::Sheets {
            spreadsheet_id: spreadsheet_id.into(),
            sheet: default_sheet(),
            token_env: default_token_env(),
            api_base: default_api_base(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::Redb { .. } => "redb",
            StoreBackend::Sheets { .. } => "sheets",
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreBackend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerConfig::default(),
            store: StoreBackend::default(),
        }
    }
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(RecordError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.server.port == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "server.port is 0: the OS will pick a port on every start".into(),
            });
        }

        match &self.store {
            StoreBackend::Memory => warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "memory store: lifts are lost when the server stops".into(),
            }),
            StoreBackend::Redb { path } => {
                if path.as_os_str().is_empty() {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Error,
                        message: "store.path is empty".into(),
                    });
                }
            }
            StoreBackend::Sheets {
                spreadsheet_id,
                token_env,
                api_base,
                ..
            } => {
                if spreadsheet_id.trim().is_empty() {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Error,
                        message: "store.spreadsheet_id is empty".into(),
                    });
                }
                if std::env::var_os(token_env).is_none() {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Warning,
                        message: format!("environment variable {token_env} is not set"),
                    });
                }
                if reqwest::Url::parse(api_base).is_err() {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Error,
                        message: format!("store.api_base '{api_base}' is not a valid URL"),
                    });
                }
            }
        }

        warnings
    }
}
