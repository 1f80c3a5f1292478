use super::util;
use crate::defaults::{self, read_with_default};
use crate::policy::CheckPolicy;
use privguard_host::{Host, HostError, StartMode};
use privguard_types::{ids, FactId, Finding};

/// Point and Print driver installation policy.
///
/// The decision tree is order-sensitive and short-circuits on the first true
/// branch: administrator-only installation overrides everything, then the
/// silent-install path, then the absence of a server allow-list. Each of the
/// six observations additionally carries its own locally computed compliance
/// flag; an item can read non-compliant while the aggregate verdict is safe
/// (the admin gate wins).
pub fn run(host: &dyn Host, policy: &CheckPolicy) -> Result<Finding, HostError> {
    let spooler = host.services(ids::SERVICE_SPOOLER);
    let spooler_enabled = spooler
        .iter()
        .any(|s| s.start_mode != StartMode::Disabled);

    if !spooler_enabled {
        let observations = vec![util::info_observation(
            FactId::label("PrintSpooler"),
            if spooler.is_empty() { "absent" } else { "disabled" },
            "The print spooler service is absent or disabled; Point and Print does not apply.",
        )];
        return Ok(util::finding(
            ids::CHECK_POINT_AND_PRINT,
            false,
            policy,
            observations,
        ));
    }

    let restrict = read_with_default(host, &defaults::PNP_RESTRICT_DRIVER_INSTALL)?;
    let no_warning = read_with_default(host, &defaults::PNP_NO_WARNING_NO_ELEVATION)?;
    let update_prompt = read_with_default(host, &defaults::PNP_UPDATE_PROMPT_SETTINGS)?;
    let trusted_servers = read_with_default(host, &defaults::PNP_TRUSTED_SERVERS)?;
    let server_list = read_with_default(host, &defaults::PNP_SERVER_LIST)?;
    let package_list = read_with_default(host, &defaults::PNP_PACKAGE_SERVER_LIST)?;

    let vulnerable = if restrict.dword() == 1 {
        false
    } else if no_warning.dword() == 1 || update_prompt.dword() >= 1 {
        true
    } else if trusted_servers.dword() == 0 || package_list.dword() == 0 {
        true
    } else {
        false
    };

    let observations = vec![
        util::annotated_observation(
            &restrict,
            describe_restrict(restrict.dword()),
            restrict.dword() == 1,
        ),
        util::annotated_observation(
            &no_warning,
            describe_no_warning(no_warning.dword()),
            no_warning.dword() == 0,
        ),
        util::annotated_observation(
            &update_prompt,
            describe_update_prompt(update_prompt.dword()),
            update_prompt.dword() == 0,
        ),
        util::annotated_observation(
            &trusted_servers,
            describe_trusted_servers(trusted_servers.dword()),
            trusted_servers.dword() == 1,
        ),
        util::annotated_observation(
            &server_list,
            describe_server_list(server_list.text()),
            !server_list.text().is_empty(),
        ),
        util::annotated_observation(
            &package_list,
            describe_package_list(package_list.dword()),
            package_list.dword() == 1,
        ),
    ];

    Ok(util::finding(
        ids::CHECK_POINT_AND_PRINT,
        vulnerable,
        policy,
        observations,
    ))
}

fn describe_restrict(value: u32) -> String {
    if value == 1 {
        "Installing printer drivers requires administrator privileges.".to_string()
    } else {
        "Non-administrators are allowed to install printer drivers.".to_string()
    }
}

fn describe_no_warning(value: u32) -> String {
    if value == 1 {
        "Drivers install silently, without warning or elevation prompts.".to_string()
    } else {
        "Warning and elevation prompts are shown on driver installation.".to_string()
    }
}

fn describe_update_prompt(value: u32) -> String {
    if value >= 1 {
        "Driver updates install without prompting.".to_string()
    } else {
        "Driver updates prompt before installing.".to_string()
    }
}

fn describe_trusted_servers(value: u32) -> String {
    if value == 1 {
        "Driver installation is restricted to trusted print servers.".to_string()
    } else {
        "Drivers may be installed from any print server.".to_string()
    }
}

fn describe_server_list(value: &str) -> String {
    if value.is_empty() {
        "No trusted print server list is configured.".to_string()
    } else {
        format!("Trusted print servers: {value}.")
    }
}

fn describe_package_list(value: u32) -> String {
    if value == 1 {
        "Package point and print is restricted to an explicit server list.".to_string()
    } else {
        "Package point and print accepts packages from any server.".to_string()
    }
}
