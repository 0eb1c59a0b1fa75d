use mdc_admin::{AdminError, Console, Session};
use mdc_console::ScriptedKeys;
use mdc_provider::{
    AdminProvider, AdminSnapshot, ClusterStatus, ProviderError, UserRecord, VersionInfo,
};
use serde_json::json;
use std::cell::Cell;

fn snapshot(value: serde_json::Value) -> AdminSnapshot {
    serde_json::from_value(value).expect("valid snapshot fixture")
}

fn populated() -> AdminSnapshot {
    snapshot(json!({
        "compatibility": { "product": "23.5.2", "binding": "23.5.2" },
        "version": { "full": "23.5.2" },
        "domains": ["example.com", "example.org"],
        "users": [
            { "fullName": "Ada Lovelace", "email": "ada@example.com" },
            { "email": "postmaster@example.com" }
        ],
        "groups": ["Staff"],
        "cluster": {
            "enabled": true,
            "isPrimaryNode": false,
            "primaryComputerName": "MAIL01",
            "localNodeId": 2,
            "localServerId": 7,
            "localServerGuid": "5f0c6f4e-6c0b-4d55-9b7e-8d1d0c2f1a10"
        }
    }))
}

fn empty() -> AdminSnapshot {
    snapshot(json!({
        "compatibility": { "product": "23.5.2", "binding": "23.5.2" },
        "version": { "full": "23.5.2" }
    }))
}

/// Runs a ready console with the given script and returns everything written to stdout.
fn session_output(provider: &impl AdminProvider, script: &str) -> (Session, String) {
    colored::control::set_override(false);
    let mut keys = ScriptedKeys::from_chars(script);
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let session = Console::new(provider, "MDaemon Console")
        .run(&mut keys, &mut out, &mut err)
        .expect("console session");

    assert!(err.is_empty());
    (session, String::from_utf8(out).expect("utf-8 output"))
}

/// Wraps a snapshot and counts data queries.
struct CountingProvider {
    inner: AdminSnapshot,
    queries: Cell<usize>,
}

impl CountingProvider {
    fn new(inner: AdminSnapshot) -> Self {
        Self { inner, queries: Cell::new(0) }
    }

    fn hit(&self) {
        self.queries.set(self.queries.get() + 1);
    }
}

impl AdminProvider for CountingProvider {
    fn versions_match(&self) -> bool {
        self.inner.versions_match()
    }

    fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    fn version_info(&self) -> Result<VersionInfo, ProviderError> {
        self.hit();
        self.inner.version_info()
    }

    fn domain_names(&self) -> Result<Vec<String>, ProviderError> {
        self.hit();
        self.inner.domain_names()
    }

    fn users(&self) -> Result<Vec<UserRecord>, ProviderError> {
        self.hit();
        self.inner.users()
    }

    fn group_names(&self) -> Result<Vec<String>, ProviderError> {
        self.hit();
        self.inner.group_names()
    }

    fn cluster_status(&self) -> Result<ClusterStatus, ProviderError> {
        self.hit();
        self.inner.cluster_status()
    }
}

/// Ready and compatible, but every listing fails.
struct BrokenListings(AdminSnapshot);

impl AdminProvider for BrokenListings {
    fn versions_match(&self) -> bool {
        true
    }

    fn is_ready(&self) -> bool {
        true
    }

    fn version_info(&self) -> Result<VersionInfo, ProviderError> {
        self.0.version_info()
    }

    fn domain_names(&self) -> Result<Vec<String>, ProviderError> {
        Err("domain store offline".into())
    }

    fn users(&self) -> Result<Vec<UserRecord>, ProviderError> {
        Err("user store offline".into())
    }

    fn group_names(&self) -> Result<Vec<String>, ProviderError> {
        Err("group store offline".into())
    }

    fn cluster_status(&self) -> Result<ClusterStatus, ProviderError> {
        self.0.cluster_status()
    }
}

#[test]
fn version_mismatch_is_fatal_and_invokes_nothing() {
    let mut fixture = populated();
    fixture.compatibility.binding = "23.0.0".into();
    let provider = CountingProvider::new(fixture);
    let mut keys = ScriptedKeys::from_chars("1 2 3 6");
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let result = Console::new(&provider, "MDaemon Console").run(&mut keys, &mut out, &mut err);

    assert!(matches!(result, Err(AdminError::Incompatible { .. })));
    assert_eq!(provider.queries.get(), 0);
    assert_eq!(keys.remaining(), 7);
    assert!(out.is_empty() && err.is_empty());
}

#[test]
fn not_ready_warns_once_and_skips_the_menu() {
    colored::control::set_override(false);
    let mut fixture = populated();
    fixture.ready = false;
    let provider = CountingProvider::new(fixture);
    let mut keys = ScriptedKeys::from_chars("1 6");
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let session = Console::new(&provider, "MDaemon Console")
        .run(&mut keys, &mut out, &mut err)
        .expect("not ready is not an error");

    assert_eq!(session, Session::NotReady);
    assert_eq!(String::from_utf8(err).unwrap(), "MDaemon not available.\n");
    assert!(out.is_empty());
    assert_eq!(keys.remaining(), 3);
    assert_eq!(provider.queries.get(), 0);
}

#[test]
fn ready_console_greets_and_lists_features() {
    let (session, text) = session_output(&populated(), "6");

    let Session::Finished(outcome) = session else { panic!("menu should run") };
    assert_eq!(outcome.renders, 1);
    assert_eq!(outcome.invoked, 0);
    assert!(text.starts_with("Hello, MDaemon 23.5.2!\n"));
    for line in [
        "1. Version information",
        "2. List domains",
        "3. List users",
        "4. List groups",
        "5. Cluster status",
        "6. Quit",
    ] {
        assert!(text.contains(line), "missing menu line {line:?}");
    }
}

#[test]
fn version_information_shows_full_version() {
    let (_, text) = session_output(&populated(), "1 6");
    assert!(text.contains(" Version information"));
    assert!(text.contains("  Version: 23.5.2\n"));
}

#[test]
fn listings_show_every_entry() {
    let (_, text) = session_output(&populated(), "2 3 4 6");

    assert!(text.contains("Domains\n  - example.com\n  - example.org\n"));
    assert!(text.contains("Users\n  - Ada Lovelace <ada@example.com>\n  - postmaster@example.com\n"));
    assert!(text.contains("Groups\n  - Staff\n"));
}

#[test]
fn empty_listings_print_placeholders() {
    let (session, text) = session_output(&empty(), "2 3 4 6");

    assert!(matches!(session, Session::Finished(outcome) if outcome.invoked == 3));
    assert_eq!(text.matches("  No domains.\n").count(), 1);
    assert_eq!(text.matches("  No users.\n").count(), 1);
    assert_eq!(text.matches("  No groups.\n").count(), 1);
    assert!(!text.contains("  - "));
}

#[test]
fn cluster_status_shows_every_field() {
    let (_, text) = session_output(&populated(), "5 6");

    for line in [
        "  Enabled: yes\n",
        "  Primary node: no\n",
        "  Primary computer: MAIL01\n",
        "  Local node ID: 2\n",
        "  Local server ID: 7\n",
        "  Local server GUID: 5f0c6f4e-6c0b-4d55-9b7e-8d1d0c2f1a10\n",
    ] {
        assert!(text.contains(line), "missing cluster line {line:?}");
    }
}

#[test]
fn every_selection_queries_the_provider_afresh() {
    let provider = CountingProvider::new(populated());
    let (session, _) = session_output(&provider, "2 2 2 6");

    assert!(matches!(session, Session::Finished(outcome) if outcome.invoked == 3));
    // One query for the greeting, one per listing.
    assert_eq!(provider.queries.get(), 4);
}

#[test]
fn provider_failures_become_error_banners() {
    let (session, text) = session_output(&BrokenListings(populated()), "2346");

    let Session::Finished(outcome) = session else { panic!("menu should run") };
    assert_eq!(outcome.invoked, 3);
    assert_eq!(outcome.failed, 3);
    assert_eq!(outcome.renders, 4);
    assert!(text.contains("domain store offline"));
    assert!(text.contains("user store offline"));
    assert!(text.contains("group store offline"));
    assert!(text.contains(" Error: Admin data unavailable (Failed to list domains)"));
}
