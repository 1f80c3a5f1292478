use super::util;
use crate::defaults::{self, read_with_default};
use crate::policy::CheckPolicy;
use privguard_host::{Host, HostError};
use privguard_types::{ids, Finding};

/// Device driver co-installers. The platform default (value absent) leaves
/// co-installers enabled, which is the vulnerable state.
pub fn run(host: &dyn Host, policy: &CheckPolicy) -> Result<Finding, HostError> {
    let disable = read_with_default(host, &defaults::DISABLE_COINSTALLERS)?;
    let vulnerable = disable.dword() < 1;

    let observations = vec![util::resolved_observation(
        &disable,
        describe(disable.dword()),
    )];

    Ok(util::finding(
        ids::CHECK_DRIVER_COINSTALLERS,
        vulnerable,
        policy,
        observations,
    ))
}

fn describe(value: u32) -> String {
    if value >= 1 {
        "Driver co-installer execution is disabled.".to_string()
    } else {
        "Driver co-installers run with SYSTEM privileges during device installation.".to_string()
    }
}
