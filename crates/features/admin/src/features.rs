use crate::error::{AdminError, AdminErrorExt};
use mdc_console::Feature;
use mdc_console::render::{self, yes_no};
use mdc_provider::{AdminProvider, UserRecord};
use std::io::Write;

pub const VERSION_INFO: &str = "Version information";
pub const LIST_DOMAINS: &str = "List domains";
pub const LIST_USERS: &str = "List users";
pub const LIST_GROUPS: &str = "List groups";
pub const CLUSTER_STATUS: &str = "Cluster status";
pub const QUIT: &str = "Quit";

/// The console's fixed feature list, `Quit` last.
///
/// Every action queries `provider` when it runs, never ahead of time.
pub fn features<'a, P>(provider: &'a P) -> Vec<Feature<'a>>
where
    P: AdminProvider + ?Sized,
{
    vec![
        Feature::new(VERSION_INFO, move |out| show_version(provider, out).map_err(Into::into)),
        Feature::new(LIST_DOMAINS, move |out| list_domains(provider, out).map_err(Into::into)),
        Feature::new(LIST_USERS, move |out| list_users(provider, out).map_err(Into::into)),
        Feature::new(LIST_GROUPS, move |out| list_groups(provider, out).map_err(Into::into)),
        Feature::new(CLUSTER_STATUS, move |out| {
            show_cluster(provider, out).map_err(Into::into)
        }),
        Feature::quit(QUIT),
    ]
}

fn show_version<P>(provider: &P, out: &mut dyn Write) -> Result<(), AdminError>
where
    P: AdminProvider + ?Sized,
{
    let info = provider.version_info().context("Failed to fetch version information")?;

    render::banner(out, VERSION_INFO)?;
    render::field(out, "Version", &info.full)?;
    Ok(())
}

fn list_domains<P>(provider: &P, out: &mut dyn Write) -> Result<(), AdminError>
where
    P: AdminProvider + ?Sized,
{
    let domains = provider.domain_names().context("Failed to list domains")?;
    render::titled_list(out, "Domains", &domains, "domains")?;
    Ok(())
}

fn list_users<P>(provider: &P, out: &mut dyn Write) -> Result<(), AdminError>
where
    P: AdminProvider + ?Sized,
{
    let users = provider.users().context("Failed to list users")?;
    let rows: Vec<String> = users.iter().map(user_row).collect();
    render::titled_list(out, "Users", &rows, "users")?;
    Ok(())
}

fn list_groups<P>(provider: &P, out: &mut dyn Write) -> Result<(), AdminError>
where
    P: AdminProvider + ?Sized,
{
    let groups = provider.group_names().context("Failed to list groups")?;
    render::titled_list(out, "Groups", &groups, "groups")?;
    Ok(())
}

fn show_cluster<P>(provider: &P, out: &mut dyn Write) -> Result<(), AdminError>
where
    P: AdminProvider + ?Sized,
{
    let status = provider.cluster_status().context("Failed to fetch cluster status")?;

    render::banner(out, CLUSTER_STATUS)?;
    render::field(out, "Enabled", yes_no(status.enabled))?;
    render::field(out, "Primary node", yes_no(status.is_primary_node))?;
    render::field(out, "Primary computer", &status.primary_computer_name)?;
    render::field(out, "Local node ID", status.local_node_id)?;
    render::field(out, "Local server ID", status.local_server_id)?;
    render::field(out, "Local server GUID", &status.local_server_guid)?;
    Ok(())
}

/// `Full Name <email>`, or the bare address when no name is on record.
fn user_row(user: &UserRecord) -> String {
    user.display_name()
        .map_or_else(|| user.email.clone(), |name| format!("{name} <{}>", user.email))
}
