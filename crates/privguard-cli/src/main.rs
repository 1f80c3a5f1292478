//! CLI entry point for privguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `privguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use privguard_app::{
    parse_report_json, render_markdown, run_audit, run_explain, serialize_report,
    verdict_exit_code, AuditInput, ExplainOutput,
};
use privguard_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "privguard",
    version,
    about = "Local privilege escalation audit for Windows host snapshots"
)]
struct Cli {
    /// Path to privguard config TOML.
    #[arg(long, default_value = "privguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|strict|audit).
    #[arg(long)]
    profile: Option<String>,

    /// Override the fail threshold (none|low|medium|high|critical).
    #[arg(long)]
    fail_on: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate all checks against a host snapshot and write artifacts.
    Audit {
        /// Path to the host snapshot JSON produced by a collector.
        #[arg(long)]
        snapshot: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/privguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/privguard/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/privguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a check_id with remediation guidance.
    Explain {
        /// The check_id to explain (e.g., "installer.always_install_elevated").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Audit {
            ref snapshot,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_audit(
            &cli,
            snapshot.clone(),
            report_out.clone(),
            write_markdown,
            markdown_out.clone(),
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn cmd_audit(
    cli: &Cli,
    snapshot: Utf8PathBuf,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let snapshot_text = std::fs::read_to_string(&snapshot)
            .with_context(|| format!("read snapshot: {snapshot}"))?;

        // Missing config file is allowed (defaults apply).
        let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

        let overrides = Overrides {
            profile: cli.profile.clone(),
            fail_on: cli.fail_on.clone(),
        };

        let output = run_audit(AuditInput {
            snapshot_text: &snapshot_text,
            config_text: &cfg_text,
            overrides,
        })?;

        write_report_file(&report_out, &output.report).context("write report json")?;

        if write_markdown {
            let md = render_markdown(&output.report);
            write_text_file(&markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("privguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(
    path: &Utf8Path,
    report: &privguard_app::AuditReportV1,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{md}");
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", privguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
        } => {
            eprint!(
                "{}",
                privguard_app::format_not_found(&identifier, available_check_ids)
            );
            std::process::exit(1);
        }
    }
}
