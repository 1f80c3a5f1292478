//! Explain registry for checks.
//!
//! Maps check IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check.
    pub title: &'static str,
    /// What the check decides and why the condition is exploitable.
    pub description: &'static str,
    /// How to close the exposure.
    pub remediation: &'static str,
    /// The registry key or filesystem path the remediation applies to.
    pub location: &'static str,
}

/// Look up an explanation by check_id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CHECK_ALWAYS_INSTALL_ELEVATED => Some(explain_always_install_elevated()),
        ids::CHECK_WSUS_OVER_HTTP => Some(explain_wsus_over_http()),
        ids::CHECK_HARDENED_UNC_PATHS => Some(explain_hardened_unc_paths()),
        ids::CHECK_WRITABLE_PATH_DIRS => Some(explain_writable_path_dirs()),
        ids::CHECK_POINT_AND_PRINT => Some(explain_point_and_print()),
        ids::CHECK_DRIVER_COINSTALLERS => Some(explain_driver_coinstallers()),
        ids::CHECK_SCCM_CACHE_FOLDER | ids::CHECK_SCCM_CACHE_CONTENTS => {
            Some(explain_sccm_cache())
        }
        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_ALWAYS_INSTALL_ELEVATED,
        ids::CHECK_WSUS_OVER_HTTP,
        ids::CHECK_HARDENED_UNC_PATHS,
        ids::CHECK_WRITABLE_PATH_DIRS,
        ids::CHECK_POINT_AND_PRINT,
        ids::CHECK_DRIVER_COINSTALLERS,
        ids::CHECK_SCCM_CACHE_FOLDER,
        ids::CHECK_SCCM_CACHE_CONTENTS,
    ]
}

fn explain_always_install_elevated() -> Explanation {
    Explanation {
        title: "AlwaysInstallElevated",
        description: "\
When AlwaysInstallElevated is set to 1 in both the machine and the user hive, \
the Windows Installer runs every MSI package with SYSTEM privileges. Any local \
user can then gain SYSTEM by installing a crafted package.",
        remediation: "\
Set AlwaysInstallElevated to 0 (or delete the value) in at least one of the two \
hives; the protection only fails when both are nonzero.",
        location: ids::KEY_INSTALLER_MACHINE,
    }
}

fn explain_wsus_over_http() -> Explanation {
    Explanation {
        title: "WSUS update server over HTTP",
        description: "\
A WSUS server reached over cleartext HTTP allows an attacker in a \
machine-in-the-middle position to inject malicious updates, which install as \
SYSTEM.",
        remediation: "\
Serve updates over HTTPS (set WUServer to an https:// URL), or stop using the \
custom server (UseWUServer=0).",
        location: ids::KEY_WINDOWS_UPDATE,
    }
}

fn explain_hardened_unc_paths() -> Explanation {
    Explanation {
        title: "Hardened UNC paths",
        description: "\
Without mutual authentication and integrity (or privacy) on SYSVOL and \
NETLOGON, group policy payloads fetched from those shares can be spoofed, \
leading to code execution as SYSTEM on domain members.",
        remediation: "\
Configure RequireMutualAuthentication=1 together with RequireIntegrity=1 or \
RequirePrivacy=1 for \\\\*\\SYSVOL and \\\\*\\NETLOGON, and remove any entry \
that sets one of those fields to 0.",
        location: ids::KEY_HARDENED_PATHS,
    }
}

fn explain_writable_path_dirs() -> Explanation {
    Explanation {
        title: "Writable %PATH% directories",
        description: "\
A directory on the machine-wide %PATH% that the current user can write to \
allows planting a DLL that privileged processes will load in its place (DLL \
search-order hijacking).",
        remediation: "\
Remove the directory from the system Path value, or tighten its ACL so that \
unprivileged principals cannot create or modify files in it.",
        location: ids::KEY_SESSION_ENVIRONMENT,
    }
}

fn explain_point_and_print() -> Explanation {
    Explanation {
        title: "Point and Print driver installation",
        description: "\
With RestrictDriverInstallationToAdministrators=0 and either silent installs \
enabled or no trusted server allow-list, a non-administrator can install an \
attacker-controlled printer driver, which runs as SYSTEM in the spooler.",
        remediation: "\
Set RestrictDriverInstallationToAdministrators=1. If non-admin installation is \
required, keep warning and elevation prompts enabled and constrain sources via \
TrustedServers, ServerList, and PackagePointAndPrintServerList.",
        location: ids::KEY_POINT_AND_PRINT,
    }
}

fn explain_driver_coinstallers() -> Explanation {
    Explanation {
        title: "Device driver co-installers",
        description: "\
Co-installers are vendor binaries executed with SYSTEM privileges whenever a \
matching device is plugged in. Several of them spawn UI components that can be \
escaped into a SYSTEM shell.",
        remediation: "Set DisableCoInstallers=1.",
        location: ids::KEY_DEVICE_INSTALLER,
    }
}

fn explain_sccm_cache() -> Explanation {
    Explanation {
        title: "SCCM client cache folder",
        description: "\
The SCCM client cache is readable by all local users and frequently holds \
deployment scripts and configuration files containing credentials.",
        remediation: "\
Purge sensitive files from the cache, avoid embedding credentials in \
deployment packages, and restrict the folder ACL where possible.",
        location: ids::SCCM_CACHE_FOLDER,
    }
}
