/// CLI configuration
use crate::error::{CliError, Result};
use illuminate_client::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "illuminate.toml";

/// Prefix for environment overrides, e.g. `ILLUMINATE_API__BASE_URL`.
pub const ENV_PREFIX: &str = "ILLUMINATE";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_ui")]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Seeds the `access_token` cookie
    #[serde(default)]
    pub access_token: Option<String>,

    /// Seeds the `refresh_token` cookie
    #[serde(default)]
    pub refresh_token: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Where the theme preference file lives
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
}

impl CliConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; otherwise `illuminate.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (ILLUMINATE_API__BASE_URL, ...)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CliError::Config(format!(
                "api.base_url must start with http:// or https:// (got {:?})",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(CliError::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            url: self.api.base_url.clone(),
            access_token: self.api.access_token.clone(),
            refresh_token: self.api.refresh_token.clone(),
            timeout_secs: self.api.timeout_secs,
        }
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        access_token: None,
        refresh_token: None,
        timeout_secs: default_timeout_secs(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_ui() -> UiSettings {
    UiSettings {
        state_dir: default_state_dir(),
    }
}

fn default_state_dir() -> PathBuf {
    PathBuf::from(".illuminate")
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            ui: default_ui(),
        }
    }
}
