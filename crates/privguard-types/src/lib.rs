//! Stable DTOs and IDs used across the privguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable check IDs and the registry locations each check audits
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod identity;
pub mod ids;
pub mod report;

pub use explain::{Explanation, lookup_explanation};
pub use identity::FactId;
pub use report::{
    AuditData, AuditReportV1, Finding, Observation, ReportEnvelope, Severity, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
