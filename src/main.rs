use anyhow::Result;
use clap::Parser;
use numpy_qa_bank::cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for command output
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("numpy_qa_bank=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run()
}
