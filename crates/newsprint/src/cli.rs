//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{NewsletterPaths, NEWSLETTER_DATA, NEWSLETTER_OUTPUT, NEWSLETTER_TEMPLATE};

/// Build an email-ready HTML newsletter from a template and YAML data.
#[derive(Parser, Debug)]
#[command(name = "newsprint", version, about)]
pub struct Cli {
    /// HTML template with {{ placeholders }}.
    #[arg(short, long, default_value = NEWSLETTER_TEMPLATE)]
    pub template: PathBuf,

    /// YAML file with the newsletter data.
    #[arg(short, long, default_value = NEWSLETTER_DATA)]
    pub data: PathBuf,

    /// Where to write the finished newsletter.
    #[arg(short, long, default_value = NEWSLETTER_OUTPUT)]
    pub output: PathBuf,

    /// Skip CSS inlining and keep style rules in the <style> block.
    #[arg(long)]
    pub no_inline: bool,

    /// Log filter directive (e.g. debug, warn, newsprint=trace). Overrides RUST_LOG.
    #[arg(long, value_parser = parse_directive)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Input and output locations selected on the command line.
    pub fn paths(&self) -> NewsletterPaths {
        NewsletterPaths::new(&self.template, &self.output, &self.data)
    }
}

/// Accepts `value` only if it parses as a log filter.
fn parse_directive(value: &str) -> Result<String, String> {
    EnvFilter::try_new(value)
        .map(|_| value.to_string())
        .map_err(|e| format!("invalid log filter '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config() {
        let cli = Cli::try_parse_from(["newsprint"]).unwrap();
        assert_eq!(cli.paths(), NewsletterPaths::default());
        assert!(!cli.no_inline);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "newsprint",
            "-t",
            "in.html",
            "--data",
            "d.yml",
            "-o",
            "out.html",
            "--no-inline",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.paths(), NewsletterPaths::new("in.html", "out.html", "d.yml"));
        assert!(cli.no_inline);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_malformed_log_level_is_rejected() {
        let err = Cli::try_parse_from(["newsprint", "--log-level", "newsprint=loudest"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("newsprint=loudest"));

        let cli = Cli::try_parse_from(["newsprint", "--log-level", "newsprint=trace,warn"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("newsprint=trace,warn"));
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
