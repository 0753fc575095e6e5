use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use newsprint::cli::Cli;
use newsprint::NewsletterGenerator;
use newsprint_render::TracingSink;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match run(&cli) {
        Ok(output) => {
            tracing::info!("Newsletter written to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    let mut generator = NewsletterGenerator::new(cli.paths());
    if cli.no_inline {
        generator = generator.without_inliner();
    }
    tracing::debug!(?generator, "starting newsletter generation");

    let mut sink = TracingSink;
    let output = generator
        .generate(&mut sink)
        .context("could not build the newsletter")?;
    Ok(output.to_path_buf())
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        // Already validated while parsing arguments.
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
