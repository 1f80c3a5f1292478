use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Privguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Checks: {} run / {} vulnerable\n- Observations: {}\n\n",
        verdict, report.data.checks_run, report.data.checks_vulnerable, report.data.observations_total
    ));

    if report.findings.is_empty() {
        out.push_str("No checks were run.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::None => "NONE",
            RenderableSeverity::Low => "LOW",
            RenderableSeverity::Medium => "MEDIUM",
            RenderableSeverity::High => "HIGH",
            RenderableSeverity::Critical => "CRITICAL",
        };
        let status = if f.vulnerable { "vulnerable" } else { "ok" };
        out.push_str(&format!("### [{}] `{}` — {}\n\n", sev, f.check_id, status));

        for o in &f.observations {
            let origin = if o.defaulted { " (default)" } else { "" };
            out.push_str(&format!(
                "- `{}` = `{}`{} — {}\n",
                o.identity, o.value, origin, o.description
            ));
            if let Some(compliant) = o.compliant {
                out.push_str(&format!(
                    "  - compliant: {}\n",
                    if compliant { "yes" } else { "no" }
                ));
            }
        }
        if f.observations.is_empty() {
            out.push_str("- nothing to report\n");
        }
        out.push('\n');
    }

    out
}
