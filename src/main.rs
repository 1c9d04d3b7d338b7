use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands};
use swatch::output::Printer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let printer = Printer::new();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Generate(args) => swatch::cli::generate::run(args, config, &printer)?,
        Commands::Contrast(args) => swatch::cli::contrast::run(args, &printer)?,
        Commands::Extract(args) => swatch::cli::extract::run(args, &printer)?,
        Commands::Export(args) => swatch::cli::export::run(args, config, &printer)?,
        Commands::Init(args) => swatch::cli::init::run(args, &printer)?,
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    Ok(())
}

/// Library diagnostics go to stderr, filtered by `SWATCH_LOG` (default `warn`).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("SWATCH_LOG").unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
