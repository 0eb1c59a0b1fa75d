//! Kernel utilities shared by the console crates.
//! Keep this crate lightweight: configuration loading and re-exports only.
//!
//! ## Config loading
//! ```rust,no_run
//! use mdc_kernel::config::load_app_config;
//!
//! let cfg = load_app_config(None::<&str>).unwrap();
//! println!("{}", cfg.provider.snapshot.display());
//! ```

pub mod config;

pub use mdc_domain as domain;
