//! # Admin Data Provider
//!
//! The capability set through which the console reaches the mail server's
//! administrative data, and the providers shipped with the workspace.
//!
//! The real binding to the mail server lives outside this workspace. Anything
//! that can answer the queries of [`AdminProvider`] can drive the console:
//!
//! - [`SnapshotProvider`] reads a JSON snapshot document from disk on every query.
//! - [`AdminSnapshot`] itself answers from memory, which is what tests use.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mdc_provider::{AdminProvider, SnapshotProvider};
//!
//! let provider = SnapshotProvider::open("mdaemon.json")?;
//! if provider.versions_match() && provider.is_ready() {
//!     for domain in provider.domain_names()? {
//!         println!("{domain}");
//!     }
//! }
//! # Ok::<(), mdc_provider::ProviderError>(())
//! ```

mod error;
mod snapshot;

pub use crate::error::{ProviderError, ProviderErrorExt};
pub use crate::snapshot::SnapshotProvider;
pub use mdc_domain::snapshot::{
    AdminSnapshot, ClusterStatus, CompatibilityInfo, UserRecord, VersionInfo,
};

/// Queries exposed by the mail server's administrative interface.
///
/// Every query returns a fresh view; implementations must not cache.
pub trait AdminProvider {
    /// Whether the product version matches the version the binding was built for.
    fn versions_match(&self) -> bool;

    /// Whether the administrative system is available for queries.
    fn is_ready(&self) -> bool;

    /// # Errors
    /// Returns [`ProviderError`] if the data cannot be fetched.
    fn version_info(&self) -> Result<VersionInfo, ProviderError>;

    /// # Errors
    /// Returns [`ProviderError`] if the data cannot be fetched.
    fn domain_names(&self) -> Result<Vec<String>, ProviderError>;

    /// # Errors
    /// Returns [`ProviderError`] if the data cannot be fetched.
    fn users(&self) -> Result<Vec<UserRecord>, ProviderError>;

    /// # Errors
    /// Returns [`ProviderError`] if the data cannot be fetched.
    fn group_names(&self) -> Result<Vec<String>, ProviderError>;

    /// # Errors
    /// Returns [`ProviderError`] if the data cannot be fetched.
    fn cluster_status(&self) -> Result<ClusterStatus, ProviderError>;
}

impl AdminProvider for AdminSnapshot {
    fn versions_match(&self) -> bool {
        self.compatibility.versions_match()
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn version_info(&self) -> Result<VersionInfo, ProviderError> {
        Ok(self.version.clone())
    }

    fn domain_names(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.domains.clone())
    }

    fn users(&self) -> Result<Vec<UserRecord>, ProviderError> {
        Ok(self.users.clone())
    }

    fn group_names(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.groups.clone())
    }

    fn cluster_status(&self) -> Result<ClusterStatus, ProviderError> {
        Ok(self.cluster.clone())
    }
}
