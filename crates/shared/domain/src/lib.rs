//! # Domain Models
//!
//! Plain data for the console: the administrative views returned by a provider
//! and the configuration tree. Only `serde` is allowed here; no I/O or formatting.

pub mod config;
pub mod snapshot;
