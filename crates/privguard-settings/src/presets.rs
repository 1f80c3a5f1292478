use privguard_domain::policy::{CheckPolicy, EffectiveConfig};
use privguard_types::{ids, Severity};
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into host config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        "audit" => audit_profile(),
        // default
        _ => default_profile(),
    }
}

fn default_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "default".to_string(),
        fail_on: Severity::High,
        checks: default_checks(),
    }
}

/// Strict mode keeps the same per-check severities but fails on anything.
fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: Severity::Low,
        checks: default_checks(),
    }
}

/// Audit mode reports everything but only fails on critical findings, which
/// no preset severity reaches; it is effectively warn-only.
fn audit_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "audit".to_string(),
        fail_on: Severity::Critical,
        checks: default_checks(),
    }
}

fn default_checks() -> BTreeMap<String, CheckPolicy> {
    let mut m = BTreeMap::new();

    m.insert(
        ids::CHECK_ALWAYS_INSTALL_ELEVATED.to_string(),
        CheckPolicy::enabled(Severity::High),
    );
    m.insert(
        ids::CHECK_WSUS_OVER_HTTP.to_string(),
        CheckPolicy::enabled(Severity::Medium),
    );
    m.insert(
        ids::CHECK_HARDENED_UNC_PATHS.to_string(),
        CheckPolicy::enabled(Severity::Medium),
    );
    m.insert(
        ids::CHECK_WRITABLE_PATH_DIRS.to_string(),
        CheckPolicy::enabled(Severity::High),
    );
    m.insert(
        ids::CHECK_POINT_AND_PRINT.to_string(),
        CheckPolicy::enabled(Severity::High),
    );
    m.insert(
        ids::CHECK_DRIVER_COINSTALLERS.to_string(),
        CheckPolicy::enabled(Severity::Low),
    );
    m.insert(
        ids::CHECK_SCCM_CACHE_FOLDER.to_string(),
        CheckPolicy::enabled(Severity::Low),
    );
    m.insert(
        ids::CHECK_SCCM_CACHE_CONTENTS.to_string(),
        CheckPolicy::enabled(Severity::Medium),
    );

    m
}
