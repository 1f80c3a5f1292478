use super::util;
use crate::defaults::{self, read_with_default};
use crate::policy::CheckPolicy;
use privguard_host::{Host, HostError};
use privguard_types::{ids, Finding};

/// Two-gate check with short-circuit read ordering: the machine-scope value
/// gates the user-scope read. When HKLM is absent or zero the host is safe
/// regardless of HKCU, so HKCU is never read and the finding carries a single
/// observation.
pub fn run(host: &dyn Host, policy: &CheckPolicy) -> Result<Finding, HostError> {
    let machine = read_with_default(host, &defaults::AIE_MACHINE)?;
    let mut observations = vec![util::resolved_observation(&machine, describe(machine.dword()))];

    let mut vulnerable = false;
    if machine.dword() != 0 {
        let user = read_with_default(host, &defaults::AIE_USER)?;
        vulnerable = user.dword() != 0;
        observations.push(util::resolved_observation(&user, describe(user.dword())));
    }

    Ok(util::finding(
        ids::CHECK_ALWAYS_INSTALL_ELEVATED,
        vulnerable,
        policy,
        observations,
    ))
}

fn describe(value: u32) -> String {
    if value != 0 {
        "MSI packages are installed with elevated (SYSTEM) privileges in this scope.".to_string()
    } else {
        "MSI packages are installed with the privileges of the requesting user in this scope."
            .to_string()
    }
}
