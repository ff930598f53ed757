use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use acidbase_cli::args::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so stdout stays clean for reports and JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    acidbase_cli::commands::run(cli).await
}
