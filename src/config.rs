//! Settings for the gallery binary.
//!
//! Every section is optional in TOML; missing keys fall back to the defaults
//! below. [`Config::load`] looks for `./pm-widgets.toml` first, then
//! `$XDG_CONFIG_HOME/pm-widgets/config.toml`.

use crate::constants::{APP_DIR_NAME, FOOTER_DEFAULT_BRAND, QUOTE_INTERVAL_MAX_MS, QUOTE_INTERVAL_MS};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const LOCAL_CONFIG_FILE: &str = "pm-widgets.toml";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub footer: FooterConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Icon theme: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
    /// Milliseconds between banner quote rotations
    pub quote_interval_ms: u64,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Footer defaults used by the gallery
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub brand_name: String,
    /// Route labels; when empty the gallery uses its demo routes
    pub routes: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the local data directory
    pub enabled: bool,
    /// Maximum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            quote_interval_ms: QUOTE_INTERVAL_MS,
            mouse_enabled: false,
        }
    }
}

impl UiConfig {
    #[must_use]
    pub fn quote_interval(&self) -> Duration {
        Duration::from_millis(self.quote_interval_ms)
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            brand_name: FOOTER_DEFAULT_BRAND.to_string(),
            routes: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level into a `log` filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load the first config file found, or the defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::candidate_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => {
                let config = Self::load_from_file(&path)?;
                log::debug!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate a TOML config file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
        let config: Config = toml::from_str(&raw).with_context(|| format!("Invalid TOML in {}", path.display()))?;

        config.validate().with_context(|| format!("Invalid settings in {}", path.display()))?;
        Ok(config)
    }

    /// Places searched for a config file, highest precedence first
    #[must_use]
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Ok(path) = Self::get_default_config_path() {
            paths.push(path);
        }
        paths
    }

    pub fn validate(&self) -> Result<()> {
        let interval = self.ui.quote_interval_ms;
        anyhow::ensure!(interval > 0, "ui.quote_interval_ms must be greater than zero");
        anyhow::ensure!(
            interval <= QUOTE_INTERVAL_MAX_MS,
            "ui.quote_interval_ms cannot exceed {} (one hour), got {}",
            QUOTE_INTERVAL_MAX_MS,
            interval
        );
        anyhow::ensure!(
            !self.footer.brand_name.trim().is_empty(),
            "footer.brand_name cannot be empty"
        );
        self.logging.level_filter()?;
        Ok(())
    }

    /// Write the defaults to `path` as commented TOML, creating parent directories
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let body = toml::to_string_pretty(&Self::default()).context("Cannot serialize default config")?;
        let contents = format!(
            "# pm-widgets Configuration File\n# Generated on {}\n\n{}",
            chrono::Local::now().format("%Y-%m-%d"),
            body
        );

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).with_context(|| format!("Cannot create {}", dir.display()))?;
        }
        std::fs::write(path, contents).with_context(|| format!("Cannot write {}", path.display()))?;

        Ok(())
    }

    /// `$XDG_CONFIG_HOME/pm-widgets`
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("No configuration directory on this platform")?;
        Ok(base.join(APP_DIR_NAME))
    }

    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }
}
