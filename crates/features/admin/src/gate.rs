use crate::error::AdminError;
use colored::Colorize;
use mdc_provider::AdminProvider;
use std::io::{self, Write};
use tracing::{error, info, warn};

/// Result of the checks run before the menu is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Startup {
    Ready,
    /// Versions match but the admin system cannot answer queries yet.
    NotReady,
}

/// Fails fast on a version mismatch, then reports readiness.
///
/// Only the two flags are queried; no data is fetched.
///
/// # Errors
/// Returns [`AdminError::Incompatible`] when the mail server and the binding
/// disagree on the product version.
pub fn check_startup<P>(provider: &P) -> Result<Startup, AdminError>
where
    P: AdminProvider + ?Sized,
{
    if !provider.versions_match() {
        error!("MDaemon and admin binding versions differ, aborting");
        return Err(AdminError::Incompatible {
            message: "MDaemon version and admin binding version do NOT match".into(),
            context: None,
        });
    }

    if !provider.is_ready() {
        warn!("MDaemon reported not ready");
        return Ok(Startup::NotReady);
    }

    info!("MDaemon ready");
    Ok(Startup::Ready)
}

/// `Hello, MDaemon <version>!`
///
/// # Errors
/// Returns the sink's I/O error.
pub fn greet(out: &mut (impl Write + ?Sized), version: &str) -> io::Result<()> {
    writeln!(out, "{} {}{}", "Hello, MDaemon".green(), version.yellow(), "!".green())
}

/// `MDaemon not available.`
///
/// # Errors
/// Returns the sink's I/O error.
pub fn not_available(out: &mut (impl Write + ?Sized)) -> io::Result<()> {
    writeln!(out, "MDaemon {} available.", "not".red())
}
