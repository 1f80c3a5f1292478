//! The `audit` use case: evaluate all checks against a snapshot and produce a report.

use anyhow::Context;
use privguard_host::HostSnapshot;
use privguard_settings::{Overrides, ResolvedConfig};
use privguard_types::{AuditReportV1, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Host snapshot JSON, as produced by a collector.
    pub snapshot_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    /// The generated report.
    pub report: AuditReportV1,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the audit use case: parse snapshot and config, evaluate checks, produce report.
pub fn run_audit(input: AuditInput<'_>) -> anyhow::Result<AuditOutput> {
    let started_at = OffsetDateTime::now_utc();

    let snapshot = HostSnapshot::from_json(input.snapshot_text).context("parse host snapshot")?;

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        privguard_settings::PrivguardConfigV1::default()
    } else {
        privguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = privguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let domain_report = privguard_domain::evaluate(&snapshot, &resolved.effective)
        .context("evaluate checks")?;

    let finished_at = OffsetDateTime::now_utc();

    let report = AuditReportV1 {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "privguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(AuditOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
