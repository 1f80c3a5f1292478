use super::util;
use crate::defaults::{self, read_with_default};
use crate::policy::CheckPolicy;
use privguard_host::{Host, HostError};
use privguard_types::{ids, FactId, Finding, Observation};

/// DLL search-order hijacking via the machine-wide %PATH%.
///
/// Every directory on the path is probed; there is no directory-level
/// short-circuit, so the finding lists all writable directories.
pub fn run(host: &dyn Host, policy: &CheckPolicy) -> Result<Finding, HostError> {
    let path_value = read_with_default(host, &defaults::SYSTEM_PATH)?;

    let mut observations: Vec<Observation> = Vec::new();
    for dir in path_value
        .text()
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        for grant in host.writable_paths(dir) {
            observations.push(Observation {
                identity: FactId::path(&grant.path),
                value: grant.permissions.join(", "),
                defaulted: false,
                description: format!(
                    "{} can create or modify files in this %PATH% directory.",
                    grant.identity_reference
                ),
                compliant: None,
            });
        }
    }

    let vulnerable = !observations.is_empty();
    Ok(util::finding(
        ids::CHECK_WRITABLE_PATH_DIRS,
        vulnerable,
        policy,
        observations,
    ))
}
