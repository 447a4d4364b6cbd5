use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
use commands::{rewrite::RewriteArgs, scan::ScanArgs, test::TestArgs};

#[derive(Parser)]
#[command(name = "quantshield")]
#[command(about = "Quantum-vulnerability scanner and post-quantum code rewriter")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan source code for quantum-vulnerable cryptography
    Scan(ScanArgs),

    /// Rewrite source code toward post-quantum primitives
    Rewrite(RewriteArgs),

    /// Generate a test scaffold and optionally simulate its execution
    Test(TestArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => commands::scan::execute(args),
        Commands::Rewrite(args) => commands::rewrite::execute(args),
        Commands::Test(args) => commands::test::execute(args),
    }
}
