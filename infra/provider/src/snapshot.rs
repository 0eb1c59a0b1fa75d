use crate::error::{ProviderError, ProviderErrorExt};
use crate::AdminProvider;
use mdc_domain::snapshot::{AdminSnapshot, ClusterStatus, UserRecord, VersionInfo};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Provider backed by a JSON snapshot document.
///
/// The document is re-read on every query, so edits to the file show up on the
/// next menu action.
#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    path: PathBuf,
}

impl SnapshotProvider {
    /// Opens a snapshot document and checks that it parses.
    ///
    /// # Errors
    /// Returns [`ProviderError::Io`] if the file cannot be read and
    /// [`ProviderError::Parse`] if it is not a valid snapshot.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ProviderError> {
        let provider = Self { path: path.into() };
        provider.load()?;
        debug!(path = %provider.path.display(), "Snapshot provider opened");
        Ok(provider)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<AdminSnapshot, ProviderError> {
        trace!(path = %self.path.display(), "Reading snapshot");
        let raw = fs::read_to_string(&self.path)
            .context(format!("Failed to read {}", self.path.display()))?;
        serde_json::from_str::<AdminSnapshot>(&raw)
            .context(format!("Failed to parse {}", self.path.display()))
    }

    /// Evaluates a flag, reporting `false` when the document is unreadable.
    fn flag(&self, name: &'static str, read: impl FnOnce(&AdminSnapshot) -> bool) -> bool {
        match self.load() {
            Ok(snapshot) => read(&snapshot),
            Err(e) => {
                warn!(flag = name, error = %e, "Snapshot unavailable, reporting flag as false");
                false
            },
        }
    }
}

impl AdminProvider for SnapshotProvider {
    fn versions_match(&self) -> bool {
        self.flag("versions_match", |s| s.versions_match())
    }

    fn is_ready(&self) -> bool {
        self.flag("is_ready", |s| s.ready)
    }

    fn version_info(&self) -> Result<VersionInfo, ProviderError> {
        Ok(self.load()?.version)
    }

    fn domain_names(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.load()?.domains)
    }

    fn users(&self) -> Result<Vec<UserRecord>, ProviderError> {
        Ok(self.load()?.users)
    }

    fn group_names(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.load()?.groups)
    }

    fn cluster_status(&self) -> Result<ClusterStatus, ProviderError> {
        Ok(self.load()?.cluster)
    }
}
