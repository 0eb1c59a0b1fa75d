use anyhow::Context;
use mdc_admin::Console;
use mdc_console::TerminalKeys;
use mdc_kernel::config::load_app_config;
use mdc_kernel::domain::config::LoggingConfig;
use mdc_logger::{Logger, parse_level, parse_rotation};
use mdc_provider::SnapshotProvider;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

/// Optional path of an explicit config file; it must exist when set.
const CONFIG_ENV: &str = "MDC_CONFIG";

fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = load_app_config(config_path.as_deref()).context("Failed to load configuration")?;

    let _logger = init_logger(&config.logging)?;
    debug!(?config, "Configuration loaded");

    let snapshot = &config.provider.snapshot;
    let provider = SnapshotProvider::open(snapshot)
        .with_context(|| format!("Failed to open admin snapshot {}", snapshot.display()))?;

    let session = Console::new(&provider, config.console.title.clone()).run(
        &mut TerminalKeys::new(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    info!(?session, "Exiting");
    Ok(())
}

/// Installs the global subscriber, or nothing when every output is disabled.
fn init_logger(config: &LoggingConfig) -> anyhow::Result<Option<Logger>> {
    if !config.console && config.directory.is_none() {
        return Ok(None);
    }

    let builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .console(config.console)
        .level(parse_level(&config.level)?);
    let builder = match &config.filter {
        Some(filter) => builder.env_filter(filter),
        None => builder,
    };

    let logger = match &config.directory {
        Some(directory) => {
            let builder = builder
                .path(directory)
                .max_files(config.max_files)
                .rotation(parse_rotation(&config.rotation)?);
            if config.json { builder.json().init() } else { builder.init() }
        },
        None => builder.init(),
    }
    .context("Failed to initialize logging")?;

    Ok(Some(logger))
}
