//! Use case orchestration for privguard.
//!
//! This crate provides the application layer: use cases that coordinate the host, domain,
//! settings, and render layers. It is intentionally thin and delegates heavy lifting to the
//! appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod render;

pub use audit::{run_audit, verdict_exit_code, AuditInput, AuditOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use render::{
    parse_report_json, render_markdown, serialize_report, to_renderable, write_report,
};

pub use privguard_types::AuditReportV1;
