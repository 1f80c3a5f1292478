use crate::defaults::Resolved;
use crate::fingerprint::fingerprint_for_check;
use crate::policy::CheckPolicy;
use privguard_types::{FactId, Finding, Observation, Severity};
use std::collections::BTreeSet;

pub fn resolved_observation(resolved: &Resolved, description: String) -> Observation {
    Observation {
        identity: resolved.identity.clone(),
        value: resolved.render(),
        defaulted: resolved.defaulted,
        description,
        compliant: None,
    }
}

/// Observation carrying a per-value compliance flag, computed from that value
/// alone and independent of the check's aggregate verdict.
pub fn annotated_observation(
    resolved: &Resolved,
    description: String,
    compliant: bool,
) -> Observation {
    Observation {
        compliant: Some(compliant),
        ..resolved_observation(resolved, description)
    }
}

/// Free-form observation for facts that are not registry reads (preconditions,
/// filesystem state).
pub fn info_observation(identity: FactId, value: &str, description: &str) -> Observation {
    Observation {
        identity,
        value: value.to_string(),
        defaulted: false,
        description: description.to_string(),
        compliant: None,
    }
}

/// Assemble a finding: severity is the caller-supplied base when vulnerable,
/// `None` otherwise.
pub fn finding(
    check_id: &str,
    vulnerable: bool,
    policy: &CheckPolicy,
    observations: Vec<Observation>,
) -> Finding {
    let severity = if vulnerable {
        policy.base_severity
    } else {
        Severity::None
    };
    let identities: Vec<&str> = observations.iter().map(|o| o.identity.as_str()).collect();
    let fingerprint = fingerprint_for_check(check_id, vulnerable, &identities);

    Finding {
        check_id: check_id.to_string(),
        vulnerable,
        severity,
        observations,
        fingerprint: Some(fingerprint),
    }
}

/// Parse a hardened-path value as an unordered attribute set.
///
/// The data is a comma/semicolon-joined `Name=Value` list; field order and
/// surrounding whitespace are not significant.
pub fn parse_attribute_set(raw: &str) -> BTreeSet<String> {
    raw.split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Membership test over a parsed attribute set, ignoring case and whitespace.
pub fn has_field(fields: &BTreeSet<String>, want: &str) -> bool {
    let want = normalize(want);
    fields.iter().any(|f| normalize(f) == want)
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn attribute_set_splits_on_comma_and_semicolon() {
        let fields = parse_attribute_set("RequireMutualAuthentication=1, RequireIntegrity=1;RequirePrivacy=0");
        assert_eq!(fields.len(), 3);
        assert!(has_field(&fields, "RequireMutualAuthentication=1"));
        assert!(has_field(&fields, "requireintegrity=1"));
        assert!(has_field(&fields, "RequirePrivacy = 0"));
        assert!(!has_field(&fields, "RequirePrivacy=1"));
    }

    #[test]
    fn empty_segments_are_dropped() {
        let fields = parse_attribute_set(";, ,A=1,,");
        assert_eq!(fields.len(), 1);
        assert!(has_field(&fields, "A=1"));
    }

    proptest! {
        #[test]
        fn parse_never_panics(raw in ".{0,256}") {
            let _ = parse_attribute_set(&raw);
        }

        #[test]
        fn parse_is_order_insensitive(
            mut fields in proptest::collection::vec("[A-Za-z]{1,12}=[01]", 0..6)
        ) {
            let forward = parse_attribute_set(&fields.join(","));
            fields.reverse();
            let backward = parse_attribute_set(&fields.join(";"));
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn parse_is_idempotent(raw in "[A-Za-z=,; ]{0,64}") {
            let once = parse_attribute_set(&raw);
            let joined = once.iter().cloned().collect::<Vec<_>>().join(",");
            let twice = parse_attribute_set(&joined);
            prop_assert_eq!(once, twice);
        }
    }
}
