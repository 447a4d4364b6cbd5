//! `quantshield rewrite`: post-quantum source transformation.

use super::{read_source, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use quantshield_pipeline::{PipelineEngine, RefactorOptions};
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct RewriteArgs {
    /// File to rewrite; reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the rewritten code here instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also simulate the generated test suite
    #[arg(long)]
    pub execute_tests: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,
}

pub fn execute(args: RewriteArgs) -> Result<()> {
    let code = read_source(args.input.as_deref())?;

    let engine = PipelineEngine::new();
    let report = engine.refactor(
        &code,
        RefactorOptions {
            execute_tests: args.execute_tests,
        },
    )?;

    if let Some(path) = &args.output {
        fs::write(path, &report.refactored_code)
            .with_context(|| format!("Failed to write output: {}", path.display()))?;
    }

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Markdown => {
            println!("# Rewrite Report\n");
            println!("{}\n", report.summary);
            println!("## Changes\n");
            for change in &report.changes {
                println!("- **{}**", change.reason);
                println!("  - before: `{}`", change.before);
                println!("  - after: `{}`", change.after);
            }
            println!("\n{}", report.security_report);
        }
        OutputFormat::Console => {
            println!("{}", "🔄 Post-Quantum Rewrite".bright_blue().bold());
            println!("{}", "=".repeat(50).bright_blue());
            println!("   Language: {}", report.language.display_name());
            println!("   {}", report.summary);
            println!(
                "   Lines: {} → {}",
                report.metadata.original_lines, report.metadata.refactored_lines
            );
            println!(
                "   Security issues: {} ({} critical)",
                report.metadata.security_issues, report.metadata.critical_issues
            );
            println!(
                "   Post-quantum upgrades: {}",
                report.metadata.post_quantum_upgrades
            );

            if !report.changes.is_empty() {
                println!("\n📋 Changes:");
                for (i, change) in report.changes.iter().enumerate() {
                    println!("\n{}. {}", i + 1, change.reason.bright_white());
                    println!("   - {}", change.before.dimmed());
                    println!("   + {}", change.after.bright_green());
                }
            }

            if let Some(suite) = &report.test_results {
                println!(
                    "\n🧪 Simulated tests: {} total, {} passed, {} failed",
                    suite.total_tests, suite.passed_tests, suite.failed_tests
                );
            }

            match &args.output {
                Some(path) => println!("\n💾 Rewritten code written to {}", path.display()),
                None => {
                    println!("\n{}", "─".repeat(50));
                    println!("{}", report.refactored_code);
                }
            }
        }
    }
    Ok(())
}
