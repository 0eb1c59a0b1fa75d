//! # Admin
//!
//! The MDaemon admin console: a startup gate followed by a fixed menu of
//! read-only views over an [`AdminProvider`].
//!
//! 1. The compatibility flag is checked first; a mismatch is fatal.
//! 2. A provider that is not ready gets one `MDaemon not available.` warning and
//!    the menu is never shown.
//! 3. Otherwise the greeting is printed and the menu runs until `Quit`.
//!
//! ## Example
//!
//! ```rust
//! use mdc_admin::{Console, Session};
//! use mdc_console::ScriptedKeys;
//! use mdc_provider::AdminSnapshot;
//!
//! let snapshot: AdminSnapshot = serde_json::from_str(r#"{
//!     "compatibility": { "product": "23.5.2", "binding": "23.5.2" },
//!     "version": { "full": "23.5.2" },
//!     "domains": ["example.com"]
//! }"#)?;
//!
//! let console = Console::new(&snapshot, "MDaemon Console");
//! let mut keys = ScriptedKeys::from_chars("2 6");
//! let (mut out, mut err) = (Vec::new(), Vec::new());
//!
//! let session = console.run(&mut keys, &mut out, &mut err)?;
//! assert!(matches!(session, Session::Finished(outcome) if outcome.invoked == 1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod features;
mod gate;

pub use crate::error::{AdminError, AdminErrorExt};
pub use crate::features::{
    CLUSTER_STATUS, LIST_DOMAINS, LIST_GROUPS, LIST_USERS, QUIT, VERSION_INFO, features,
};
pub use crate::gate::{Startup, check_startup, greet, not_available};

use mdc_console::{KeySource, Menu, MenuOutcome};
use mdc_provider::AdminProvider;
use std::borrow::Cow;
use std::io::Write;
use tracing::info;

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    /// The provider was not ready; the menu was never shown.
    NotReady,
    /// The user quit the menu.
    Finished(MenuOutcome),
}

/// The admin console bound to one provider.
#[derive(Debug)]
pub struct Console<'a, P: ?Sized> {
    provider: &'a P,
    title: Cow<'static, str>,
}

impl<'a, P> Console<'a, P>
where
    P: AdminProvider + ?Sized,
{
    pub fn new(provider: &'a P, title: impl Into<Cow<'static, str>>) -> Self {
        Self { provider, title: title.into() }
    }

    /// Runs the startup gate and, when the provider is ready, the menu.
    ///
    /// Menu output and the greeting go to `out`; the not-ready warning goes to
    /// `err`.
    ///
    /// # Errors
    /// Returns [`AdminError::Incompatible`] before anything is written when the
    /// versions differ, [`AdminError::Provider`] if the version for the greeting
    /// cannot be fetched, and [`AdminError::Menu`] or [`AdminError::Output`] on
    /// terminal failures.
    pub fn run(
        &self,
        keys: &mut impl KeySource,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<Session, AdminError> {
        if check_startup(self.provider)? == Startup::NotReady {
            not_available(err).context("Failed to write readiness warning")?;
            return Ok(Session::NotReady);
        }

        let version = self.provider.version_info().context("Failed to fetch version for greeting")?;
        greet(out, &version.full).context("Failed to write greeting")?;

        let menu = Menu::new(self.title.clone(), features(self.provider));
        let outcome = menu.run(keys, out).context("Menu loop failed")?;

        info!(?outcome, "Console session finished");
        Ok(Session::Finished(outcome))
    }
}
