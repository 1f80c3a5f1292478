use crate::FactId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for privguard reports.
pub const SCHEMA_REPORT_V1: &str = "privguard.report.v1";

/// Ordered severity scale. A check reports the caller-supplied base severity
/// when the host is vulnerable and `None` otherwise; the engine never invents
/// a severity a caller did not supply.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

/// One reported configuration fact inside a finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Observation {
    /// Registry `key\name`, a filesystem path, or an abstract host-fact label.
    pub identity: FactId,

    /// The resolved value: the raw value read, or the substituted default.
    pub value: String,

    /// True when the value was absent and the documented default was substituted.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub defaulted: bool,

    /// Deterministic function of the resolved value.
    pub description: String,

    /// Per-observation compliance computed from this value alone. Only checks
    /// that annotate each observation independently set this; it never feeds
    /// the check's aggregate verdict.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliant: Option<bool>,
}

/// The structured output of one check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub check_id: String,
    pub vulnerable: bool,

    /// Base severity when vulnerable, `Severity::None` otherwise.
    pub severity: Severity,

    /// Order matters: within a check, the observation sequence reproduces the
    /// evaluation order of the decision procedure.
    pub observations: Vec<Observation>,

    /// Stable identifier intended for dedup and trending. A hash of:
    /// `check_id + verdict + observation identities`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Privguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct AuditData {
    pub checks_run: u32,
    pub checks_vulnerable: u32,
    pub observations_total: u32,
}

/// A generic report envelope.
///
/// Keeping this generic allows privguard to embed tool-specific data while
/// still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = AuditData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type AuditReportV1 = ReportEnvelope<AuditData>;
