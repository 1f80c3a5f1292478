//! Report serialization and conversion to renderable form.

use anyhow::Context;
use camino::Utf8Path;
use privguard_render::{
    RenderableData, RenderableFinding, RenderableObservation, RenderableReport,
    RenderableSeverity, RenderableVerdictStatus,
};
use privguard_types::{AuditReportV1, Finding, Severity, Verdict};

pub fn parse_report_json(text: &str) -> anyhow::Result<AuditReportV1> {
    serde_json::from_str(text).context("parse privguard report")
}

pub fn serialize_report(report: &AuditReportV1) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn write_report(path: &Utf8Path, report: &AuditReportV1) -> anyhow::Result<()> {
    let bytes = serialize_report(report)?;
    std::fs::write(path, bytes).with_context(|| format!("write report to {path}"))
}

pub fn render_markdown(report: &AuditReportV1) -> String {
    privguard_render::render_markdown(&to_renderable(report))
}

pub fn to_renderable(report: &AuditReportV1) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            checks_run: report.data.checks_run,
            checks_vulnerable: report.data.checks_vulnerable,
            observations_total: report.data.observations_total,
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        check_id: f.check_id.clone(),
        vulnerable: f.vulnerable,
        severity: match f.severity {
            Severity::None => RenderableSeverity::None,
            Severity::Low => RenderableSeverity::Low,
            Severity::Medium => RenderableSeverity::Medium,
            Severity::High => RenderableSeverity::High,
            Severity::Critical => RenderableSeverity::Critical,
        },
        observations: f
            .observations
            .iter()
            .map(|o| RenderableObservation {
                identity: o.identity.as_str().to_string(),
                value: o.value.clone(),
                defaulted: o.defaulted,
                description: o.description.clone(),
                compliant: o.compliant,
            })
            .collect(),
    }
}
