use crate::checks;
use crate::policy::{CheckPolicy, EffectiveConfig};
use privguard_types::Severity;

/// Config enabling every catalog check at the same base severity.
pub fn full_config(base_severity: Severity) -> EffectiveConfig {
    let checks = checks::catalog()
        .iter()
        .map(|(id, _)| (id.to_string(), CheckPolicy::enabled(base_severity)))
        .collect();
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: Severity::High,
        checks,
    }
}
