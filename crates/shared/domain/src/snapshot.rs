//! Read-only administrative views as handed out by an admin data provider.

use serde::{Deserialize, Serialize};

/// Product version information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Full version string, e.g. `23.5.2`.
    pub full: String,
}

/// A mail account as listed by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub full_name: Option<String>,
    pub email: String,
}

impl UserRecord {
    /// Returns the full name unless it is missing or blank.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.full_name.as_deref().map(str::trim).filter(|name| !name.is_empty())
    }
}

/// Clustering state of the local server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterStatus {
    pub enabled: bool,
    pub is_primary_node: bool,
    pub primary_computer_name: String,
    pub local_node_id: u32,
    pub local_server_id: u32,
    pub local_server_guid: String,
}

/// The two version identifiers checked before any interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityInfo {
    /// Version reported by the mail server product.
    pub product: String,
    /// Product version the binding layer was built against.
    pub binding: String,
}

impl CompatibilityInfo {
    #[must_use]
    pub fn versions_match(&self) -> bool {
        self.product == self.binding
    }
}

/// A complete administrative snapshot document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSnapshot {
    #[serde(default = "ready_by_default")]
    pub ready: bool,
    pub compatibility: CompatibilityInfo,
    pub version: VersionInfo,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub cluster: ClusterStatus,
}

const fn ready_by_default() -> bool {
    true
}
