use crate::checks;
use crate::policy::EffectiveConfig;
use crate::report::{DomainReport, SeverityCounts};
use privguard_host::{Host, HostError};
use privguard_types::{AuditData, Finding, Severity, Verdict};
use rayon::prelude::*;

/// Run every enabled check from the catalog against the host.
///
/// Checks are pure and mutually independent, so they fan out across rayon
/// workers; the accessor is the only shared resource and is read-only. An
/// accessor failure in any check aborts the whole run — no check can produce
/// a meaningful verdict without configuration access.
pub fn evaluate(host: &dyn Host, cfg: &EffectiveConfig) -> Result<DomainReport, HostError> {
    let results: Vec<Result<Option<Finding>, HostError>> = checks::catalog()
        .par_iter()
        .map(|(check_id, run)| match cfg.check_policy(check_id) {
            Some(policy) => run(host, policy).map(Some),
            None => Ok(None),
        })
        .collect();

    let mut findings = Vec::new();
    for result in results {
        if let Some(finding) = result? {
            findings.push(finding);
        }
    }

    // Deterministic ordering: severity (critical first), then check_id.
    findings.sort_by(|a, b| b.severity.cmp(&a.severity).then(a.check_id.cmp(&b.check_id)));

    let verdict = compute_verdict(&findings, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&findings);

    let data = AuditData {
        checks_run: findings.len() as u32,
        checks_vulnerable: findings.iter().filter(|f| f.vulnerable).count() as u32,
        observations_total: findings.iter().map(|f| f.observations.len() as u32).sum(),
    };

    Ok(DomainReport {
        verdict,
        findings,
        data,
        counts,
    })
}

fn compute_verdict(findings: &[Finding], fail_on: Severity) -> Verdict {
    let failing = findings
        .iter()
        .any(|f| f.vulnerable && f.severity >= fail_on);
    if failing {
        return Verdict::Fail;
    }
    if findings.iter().any(|f| f.vulnerable) {
        return Verdict::Warn;
    }
    Verdict::Pass
}
