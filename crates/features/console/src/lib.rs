//! # Console
//!
//! Terminal building blocks for the admin console:
//!
//! * [`Feature`]: a titled menu entry, either an action or the terminal `Quit` entry.
//! * [`KeySource`]: one blocking keypress at a time. [`TerminalKeys`] reads the real
//!   terminal in raw mode, [`ScriptedKeys`] replays a fixed sequence.
//! * [`Menu`]: renders `N. Title` lines, dispatches the selected feature and waits
//!   for a key before showing the menu again.
//! * [`render`]: stateless formatting helpers (banners, titled lists, label/value lines).
//!
//! ## Example
//!
//! ```rust
//! use mdc_console::{Feature, Key, Menu, ScriptedKeys};
//!
//! let menu = Menu::new(
//!     "Demo",
//!     vec![
//!         Feature::new("Say hello", |out| {
//!             writeln!(out, "hello")?;
//!             Ok(())
//!         }),
//!         Feature::quit("Quit"),
//!     ],
//! );
//!
//! let mut keys = ScriptedKeys::new([Key::Char('1'), Key::Char(' '), Key::Char('2')]);
//! let mut out = Vec::new();
//! let outcome = menu.run(&mut keys, &mut out).unwrap();
//! assert_eq!(outcome.invoked, 1);
//! ```

mod error;
mod feature;
mod keys;
mod menu;
pub mod render;

pub use crate::error::{MenuError, MenuErrorExt};
pub use crate::feature::{ActionError, Feature};
pub use crate::keys::{Key, KeySource, ScriptedKeys, TerminalKeys};
pub use crate::menu::{Menu, MenuOutcome};
