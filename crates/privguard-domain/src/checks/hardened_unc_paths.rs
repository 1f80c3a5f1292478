use super::util;
use crate::policy::CheckPolicy;
use privguard_host::{Host, HostError};
use privguard_types::{ids, FactId, Finding, Observation};

const WEAKENING_FIELDS: &[&str] = &[
    "RequireMutualAuthentication=0",
    "RequireIntegrity=0",
    "RequirePrivacy=0",
];

/// Hardened UNC path policy.
///
/// Only applicable to domain-joined hosts. On version >= 10 hardening is the
/// platform default, so the key is scanned for entries that explicitly weaken
/// it; on older versions hardening must be configured by hand for SYSVOL and
/// NETLOGON, and absence is itself a deficiency.
pub fn run(host: &dyn Host, policy: &CheckPolicy) -> Result<Finding, HostError> {
    if !host.is_domain_joined() {
        let observations = vec![util::info_observation(
            FactId::label("DomainJoined"),
            "false",
            "The host is not domain-joined; hardened UNC path policy does not apply.",
        )];
        return Ok(util::finding(
            ids::CHECK_HARDENED_UNC_PATHS,
            false,
            policy,
            observations,
        ));
    }

    let (vulnerable, observations) = if host.os_major_version() >= 10 {
        scan_for_weakened_entries(host)?
    } else {
        require_explicit_hardening(host)?
    };

    Ok(util::finding(
        ids::CHECK_HARDENED_UNC_PATHS,
        vulnerable,
        policy,
        observations,
    ))
}

/// Version >= 10: the entry set is fully dynamic; only entries that weaken a
/// protection are reported.
fn scan_for_weakened_entries(host: &dyn Host) -> Result<(bool, Vec<Observation>), HostError> {
    let mut observations = Vec::new();

    for (name, value) in host.enumerate_values(ids::KEY_HARDENED_PATHS)? {
        let raw = value.render();
        let fields = util::parse_attribute_set(&raw);
        let weakened: Vec<&str> = WEAKENING_FIELDS
            .iter()
            .copied()
            .filter(|f| util::has_field(&fields, f))
            .collect();

        if !weakened.is_empty() {
            observations.push(Observation {
                identity: FactId::registry(ids::KEY_HARDENED_PATHS, &name),
                value: raw,
                defaulted: false,
                description: format!(
                    "Hardening is explicitly weakened: {}.",
                    weakened.join(", ")
                ),
                compliant: Some(false),
            });
        }
    }

    let vulnerable = !observations.is_empty();
    Ok((vulnerable, observations))
}

/// Version < 10: SYSVOL and NETLOGON are checked by fixed name, independently
/// of each other; a deficiency in one does not short-circuit the other.
fn require_explicit_hardening(host: &dyn Host) -> Result<(bool, Vec<Observation>), HostError> {
    let mut vulnerable = false;
    let mut observations = Vec::new();

    for entry in [ids::ENTRY_SYSVOL, ids::ENTRY_NETLOGON] {
        let identity = FactId::registry(ids::KEY_HARDENED_PATHS, entry);
        match host.read_value(ids::KEY_HARDENED_PATHS, entry)? {
            None => {
                vulnerable = true;
                observations.push(Observation {
                    identity,
                    value: "(not configured)".to_string(),
                    defaulted: false,
                    description: "No hardened path policy is configured for this share."
                        .to_string(),
                    compliant: Some(false),
                });
            }
            Some(value) => {
                let raw = value.render();
                let fields = util::parse_attribute_set(&raw);
                let hardened = util::has_field(&fields, "RequireMutualAuthentication=1")
                    && (util::has_field(&fields, "RequireIntegrity=1")
                        || util::has_field(&fields, "RequirePrivacy=1"));
                if !hardened {
                    vulnerable = true;
                }
                observations.push(Observation {
                    identity,
                    value: raw,
                    defaulted: false,
                    description: if hardened {
                        "Mutual authentication and integrity or privacy are required.".to_string()
                    } else {
                        "Hardening is incomplete: mutual authentication plus integrity or privacy \
                         must be required."
                            .to_string()
                    },
                    compliant: Some(hardened),
                });
            }
        }
    }

    Ok((vulnerable, observations))
}
