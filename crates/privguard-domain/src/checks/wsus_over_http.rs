use super::util;
use crate::defaults::{self, read_with_default};
use crate::policy::CheckPolicy;
use privguard_host::{Host, HostError};
use privguard_types::{ids, Finding};

/// WSUS machine-in-the-middle exposure.
///
/// Four values are read and reported unconditionally; the verdict starts
/// vulnerable and is only ever downgraded. The downgrades form a conjunction
/// expressed as sequential negative gates, so their order does not affect the
/// final boolean — but all four observations must survive an early downgrade.
pub fn run(host: &dyn Host, policy: &CheckPolicy) -> Result<Finding, HostError> {
    let server = read_with_default(host, &defaults::WSUS_SERVER)?;
    let use_server = read_with_default(host, &defaults::WSUS_USE_SERVER)?;
    let proxy_behavior = read_with_default(host, &defaults::WSUS_PROXY_BEHAVIOR)?;
    let disable_access = read_with_default(host, &defaults::WSUS_DISABLE_ACCESS)?;

    let url = server.text().trim().to_string();

    let mut vulnerable = true;
    if server.defaulted || url.is_empty() {
        vulnerable = false;
    }
    if url.to_ascii_lowercase().starts_with("https://") {
        vulnerable = false;
    }
    if use_server.defaulted || use_server.dword() < 1 {
        vulnerable = false;
    }
    if disable_access.dword() >= 1 {
        vulnerable = false;
    }

    let observations = vec![
        util::resolved_observation(&server, describe_server(&url)),
        util::resolved_observation(&use_server, describe_use_server(use_server.dword())),
        util::resolved_observation(&proxy_behavior, describe_proxy(proxy_behavior.dword())),
        util::resolved_observation(&disable_access, describe_access(disable_access.dword())),
    ];

    Ok(util::finding(
        ids::CHECK_WSUS_OVER_HTTP,
        vulnerable,
        policy,
        observations,
    ))
}

fn describe_server(url: &str) -> String {
    if url.is_empty() {
        "No WSUS update server is configured.".to_string()
    } else if url.to_ascii_lowercase().starts_with("https://") {
        format!("Updates are fetched from {url} over TLS.")
    } else {
        format!("Updates are fetched from {url} over cleartext HTTP.")
    }
}

fn describe_use_server(value: u32) -> String {
    if value >= 1 {
        "The configured WSUS server is used for update detection.".to_string()
    } else {
        "The configured WSUS server is ignored; updates come from Microsoft Update.".to_string()
    }
}

fn describe_proxy(value: u32) -> String {
    if value >= 1 {
        "Update detection may fall back to the user-configured proxy.".to_string()
    } else {
        "Update detection uses the system proxy only.".to_string()
    }
}

fn describe_access(value: u32) -> String {
    if value >= 1 {
        "Access to Windows Update features is disabled.".to_string()
    } else {
        "Access to Windows Update features is allowed.".to_string()
    }
}
