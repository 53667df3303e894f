use clap::Parser;
use tracing_subscriber::EnvFilter;

use varsynth::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("varsynth=debug,info")
    } else {
        EnvFilter::new("varsynth=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::generate::run(cli.generate, cli.format)?;

    Ok(())
}
