use config::{Config, Environment, File, Map};
use mdc_domain::config::AppConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name of the optional config file looked up in the working directory
/// (`mdconsole.toml`, `mdconsole.json`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "mdconsole";

/// Prefix of environment overrides, e.g. `MDC__PROVIDER__SNAPSHOT`.
pub const ENV_PREFIX: &str = "MDC";

#[mdc_derive::mdc_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration tree from a file with environment overrides on top.
///
/// Layers, lowest priority first:
/// 1. **File**: `path` when given (must exist), otherwise [`DEFAULT_CONFIG_FILE`]
///    in the working directory (may be absent).
/// 2. **Environment**: variables prefixed with `MDC__`, nested with `__`
///    (`MDC__LOGGING__LEVEL=debug` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source is
/// malformed, or the merged tree does not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], reading overrides from `env` instead of the process
/// environment when given.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    debug!(path = %effective_path.display(), required, "Loading config");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true)
                .source(env),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the console's [`AppConfig`].
///
/// # Errors
/// See [`load_config`].
pub fn load_app_config(path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    load_config(path)
}
