//! `quantshield scan`: vulnerability analysis over a file, directory, or stdin.

use super::{find_source_files, read_source, OutputFormat};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use quantshield_pipeline::{AnalysisReport, PipelineEngine, Severity};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct ScanArgs {
    /// File or directory to scan; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    #[arg(short, long)]
    pub verbose: bool,
}

pub fn execute(args: ScanArgs) -> Result<()> {
    let engine = PipelineEngine::new();

    match &args.input {
        Some(path) if path.is_dir() => scan_directory(&engine, path, &args),
        _ => {
            let code = read_source(args.input.as_deref())?;
            let report = engine.analyze(&code)?;
            output_report(&report, args.input.as_deref(), args.format, args.verbose)
        }
    }
}

fn scan_directory(engine: &PipelineEngine, dir: &Path, args: &ScanArgs) -> Result<()> {
    let files = find_source_files(dir)?;
    if files.is_empty() {
        println!("⚠️  No source files found in {}", dir.display());
        return Ok(());
    }

    if args.verbose {
        println!("📁 Found {} source files", files.len());
    }

    let mut reports: BTreeMap<PathBuf, AnalysisReport> = BTreeMap::new();
    for path in files {
        let code = match std::fs::read_to_string(&path) {
            Ok(code) => code,
            Err(err) => {
                eprintln!("Warning: failed to read {}: {}", path.display(), err);
                continue;
            }
        };
        match engine.analyze(&code) {
            Ok(report) => {
                reports.insert(path, report);
            }
            Err(err) => {
                if args.verbose {
                    eprintln!("Warning: skipping {}: {}", path.display(), err);
                }
            }
        }
    }

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Markdown => {
            println!("# Directory Scan Report\n");
            for (path, report) in &reports {
                println!("## `{}`\n", path.display());
                println!("{}", report.security_report);
            }
        }
        OutputFormat::Console => {
            let total: usize = reports.values().map(|r| r.summary.total_issues).sum();
            println!("\n📊 Directory scan summary");
            println!("   Files scanned: {}", reports.len());
            println!("   Total findings: {}", total);
            for (path, report) in &reports {
                if report.summary.total_issues == 0 && !args.verbose {
                    continue;
                }
                println!("\n📄 {}", path.display());
                print_findings(report, args.verbose);
            }
        }
    }
    Ok(())
}

fn output_report(
    report: &AnalysisReport,
    path: Option<&Path>,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Markdown => {
            println!("{}", report.security_report);
        }
        OutputFormat::Console => {
            if let Some(path) = path {
                println!("\n📄 Scan results for: {}", path.display());
            }
            println!("   Language: {}", report.language.display_name());
            print_findings(report, verbose);

            if report.summary.quantum_ready {
                println!("\n{}", "✅ Quantum ready".bright_green().bold());
            } else {
                println!(
                    "\n{} risk level: {}",
                    "⚠️ ".bright_yellow(),
                    severity_colored(report.summary.risk_level)
                );
            }
            for recommendation in &report.recommendations {
                println!("   → {recommendation}");
            }
        }
    }
    Ok(())
}

fn print_findings(report: &AnalysisReport, verbose: bool) {
    if report.vulnerabilities.is_empty() {
        println!("✅ No vulnerabilities found");
        return;
    }

    println!(
        "⚠️  Found {} potential vulnerabilities:",
        report.vulnerabilities.len()
    );
    for (i, vuln) in report.vulnerabilities.iter().enumerate() {
        println!(
            "\n{}. {} {} [{}]",
            i + 1,
            vuln.severity.emoji(),
            vuln.kind.label(),
            severity_colored(vuln.severity)
        );
        println!(
            "   Location: line {}, column {}",
            vuln.location.line, vuln.location.column
        );
        println!("   {}", vuln.description);
        if verbose {
            println!("   Recommendation: {}", vuln.recommendation);
        }
    }
}

fn severity_colored(severity: Severity) -> colored::ColoredString {
    let label = severity.to_string();
    match severity {
        Severity::Critical => label.bright_red().bold(),
        Severity::High => label.bright_red(),
        Severity::Medium => label.bright_yellow(),
        Severity::Low => label.bright_blue(),
    }
}
