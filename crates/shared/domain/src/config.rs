use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level console configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
    pub console: ConsoleConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where administrative data comes from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Snapshot document read on every query.
    pub snapshot: PathBuf,
}

/// Logging output (stderr and optional rolling files).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub console: bool,
    pub directory: Option<PathBuf>,
    /// Env-filter directive overriding `RUST_LOG`, e.g. `mdc_console=debug`.
    pub filter: Option<String>,
    /// Write rotated files as JSON lines. Only used with `directory`.
    pub json: bool,
    /// Rotated files kept on disk.
    pub max_files: usize,
    /// `minutely`, `hourly`, `daily` or `never`.
    pub rotation: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Banner shown above the menu.
    pub title: String,
}

// --- Default ---

impl Default for ProviderConfig {
    fn default() -> Self {
        Self { snapshot: PathBuf::from("mdaemon.json") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            console: true,
            directory: None,
            filter: None,
            json: false,
            max_files: 7,
            rotation: "daily".to_owned(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { title: "MDaemon Console".to_owned() }
    }
}
