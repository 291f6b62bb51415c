//! Configuration loading and types

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use eyre::{eyre, WrapErr};
use serde::{Deserialize, Serialize};

use gssh_api::GlobalParams;
use gssh_client::Credentials;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "GSSH_CONFIG";

/// Account credentials and request context for the `gssh` binary
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// API public key
    #[serde(default)]
    pub public_key: Option<String>,
    /// API private key, used only to sign requests
    #[serde(default)]
    pub private_key: Option<String>,
    /// API endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Region attached to every request
    #[serde(default)]
    pub region: Option<String>,
    /// Project attached to every request
    #[serde(default)]
    pub project_id: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_key: None,
            private_key: None,
            base_url: default_base_url(),
            region: None,
            project_id: None,
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("region", &self.region)
            .field("project_id", &self.project_id)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.ucloud.cn/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .wrap_err_with(|| format!("failed to parse config {}", path.display()))?;
        if config.timeout_secs == 0 {
            return Err(eyre!(
                "timeout_secs in {} must be at least 1",
                path.display()
            ));
        }
        Ok(config)
    }

    /// Load from an explicit path, `GSSH_CONFIG`, or the default locations
    ///
    /// Falls back to defaults when no file exists. An explicit or
    /// environment-supplied path must exist.
    ///
    /// # Errors
    /// Returns error if the chosen file cannot be read or parsed
    pub fn locate(explicit: Option<&Path>) -> eyre::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }

        let mut paths = vec![PathBuf::from("gssh.toml")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("gssh/config.toml"));
        }

        for path in paths {
            if path.exists() {
                return Self::load(&path);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Config::default())
    }

    /// Apply `UCLOUD_*` overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply `UCLOUD_*` overrides from an arbitrary lookup
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(v) = get("UCLOUD_PUBLIC_KEY") {
            self.public_key = Some(v);
        }
        if let Some(v) = get("UCLOUD_PRIVATE_KEY") {
            self.private_key = Some(v);
        }
        if let Some(v) = get("UCLOUD_BASE_URL") {
            self.base_url = v;
        }
        if let Some(v) = get("UCLOUD_REGION") {
            self.region = Some(v);
        }
        if let Some(v) = get("UCLOUD_PROJECT_ID") {
            self.project_id = Some(v);
        }
    }

    /// Apply command-line overrides, which win over file and environment
    pub fn apply_overrides(&mut self, region: Option<String>, project_id: Option<String>) {
        if region.is_some() {
            self.region = region;
        }
        if project_id.is_some() {
            self.project_id = project_id;
        }
    }

    /// Key pair for signing requests
    ///
    /// # Errors
    /// Returns error if either key is missing
    pub fn credentials(&self) -> eyre::Result<Credentials> {
        match (&self.public_key, &self.private_key) {
            (Some(public), Some(private)) => Ok(Credentials::new(public, private)),
            _ => Err(eyre!(
                "public_key and private_key must be set in the config file or via UCLOUD_PUBLIC_KEY / UCLOUD_PRIVATE_KEY"
            )),
        }
    }

    #[must_use]
    pub fn global_params(&self) -> GlobalParams {
        GlobalParams::new(self.region.clone(), self.project_id.clone())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
