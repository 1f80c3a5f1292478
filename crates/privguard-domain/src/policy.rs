use privguard_types::Severity;
use std::collections::BTreeMap;

/// Caller-supplied policy for one check: whether it runs, and the severity it
/// reports when the host turns out vulnerable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub base_severity: Severity,
}

impl CheckPolicy {
    pub fn enabled(base_severity: Severity) -> Self {
        Self {
            enabled: true,
            base_severity,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            base_severity: Severity::None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,

    /// Findings at or above this severity fail the run.
    pub fail_on: Severity,

    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}
