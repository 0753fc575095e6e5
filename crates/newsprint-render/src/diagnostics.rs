//! Recoverable outcomes and the sink they are reported to.
//!
//! Transforms never fail for conditions the run can survive. Instead they
//! return an [`Outcome`]: either the transformed text, the untouched text, or
//! the untouched text plus a [`Warning`] explaining why the step was skipped.
//! The caller decides where warnings go by passing a [`DiagnosticSink`].
//!
//! ```rust
//! use newsprint_render::{embed_logo, CollectingSink, NewsletterData, Stage};
//!
//! let data = NewsletterData::new().with("logo_path", "/no/such/logo.png");
//! let html = r#"<div class="logo-container"><img src="" alt="logo"></div>"#;
//!
//! let mut sink = CollectingSink::new();
//! let out = embed_logo(html, &data).report(Stage::Logo, &mut sink);
//!
//! assert_eq!(out, html);
//! assert_eq!(sink.warnings().count(), 1);
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A step of the newsletter pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Reading the template and data files.
    Load,
    /// Embedding the logo image as a data URI.
    Logo,
    /// Substituting `{{ key }}` placeholders.
    Placeholders,
    /// Everything up to and including placeholder substitution.
    Prepare,
    /// Rewriting `var(--name)` usages to literal values.
    CssVariables,
    /// Moving style rules into inline `style` attributes.
    Inline,
    /// Writing the finished document.
    Save,
    /// The whole run.
    Generate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "Input loading",
            Stage::Logo => "Logo embedding",
            Stage::Placeholders => "Placeholder substitution",
            Stage::Prepare => "HTML preparation",
            Stage::CssVariables => "CSS variable replacement",
            Stage::Inline => "CSS inlining",
            Stage::Save => "HTML saving",
            Stage::Generate => "Newsletter generation",
        };
        f.write_str(name)
    }
}

/// A condition that skips one transform without aborting the run.
#[derive(Debug, thiserror::Error)]
pub enum Warning {
    /// The configured logo does not exist or is not a regular file.
    #[error("logo file '{}' does not exist", .path.display())]
    LogoMissing { path: PathBuf },

    /// The logo exists but could not be read.
    #[error("failed to read logo file '{}': {source}", .path.display())]
    LogoUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The logo file has no content to encode.
    #[error("logo file '{}' is empty, nothing to embed", .path.display())]
    LogoEmpty { path: PathBuf },

    /// The template has no logo container holding an image with an empty `src`.
    #[error(
        "could not find the logo image tag in the template; expected a div with \
         class \"logo-container\" containing an img tag with an empty src attribute"
    )]
    LogoElementMissing,

    /// No CSS inliner is configured.
    #[error("no CSS inliner available, style rules left in the <style> block")]
    InlinerUnavailable,
}

/// Result of a single transform.
#[derive(Debug)]
pub enum Outcome {
    /// The transform rewrote the text.
    Applied(String),
    /// There was nothing to do; the text is returned as given.
    Unchanged(String),
    /// The transform was skipped; the text is returned as given.
    Skipped { html: String, warning: Warning },
}

impl Outcome {
    /// Returns the resulting text, discarding any warning.
    pub fn into_html(self) -> String {
        match self {
            Outcome::Applied(html) | Outcome::Unchanged(html) => html,
            Outcome::Skipped { html, .. } => html,
        }
    }

    /// Returns `true` if the transform rewrote the text.
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    /// The warning attached to a skipped transform.
    pub fn warning(&self) -> Option<&Warning> {
        match self {
            Outcome::Skipped { warning, .. } => Some(warning),
            _ => None,
        }
    }

    /// Reports any warning to `sink` and returns the resulting text.
    pub fn report(self, stage: Stage, sink: &mut dyn DiagnosticSink) -> String {
        match self {
            Outcome::Applied(html) | Outcome::Unchanged(html) => html,
            Outcome::Skipped { html, warning } => {
                sink.warn(stage, &warning);
                html
            }
        }
    }
}

/// Receiver for diagnostics produced while building a newsletter.
pub trait DiagnosticSink {
    /// A transform was skipped.
    fn warn(&mut self, stage: Stage, warning: &Warning);

    /// Informational progress message.
    fn note(&mut self, stage: Stage, message: &str);

    /// A stage aborted the run.
    fn fail(&mut self, stage: Stage, message: &str);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&mut self, stage: Stage, warning: &Warning) {
        tracing::warn!(stage = %stage, "{warning}");
    }

    fn note(&mut self, stage: Stage, message: &str) {
        tracing::info!(stage = %stage, "{message}");
    }

    fn fail(&mut self, stage: Stage, message: &str) {
        tracing::error!(stage = %stage, "{message}");
    }
}

/// How serious a recorded diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Note,
    Warning,
    Error,
}

/// A diagnostic captured by [`CollectingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub stage: Stage,
    pub severity: Severity,
    pub message: String,
}

/// Records diagnostics in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded diagnostics, oldest first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Recorded warnings only.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Returns `true` if a warning was recorded for `stage`.
    pub fn warned(&self, stage: Stage) -> bool {
        self.warnings().any(|d| d.stage == stage)
    }

    /// Recorded failures only.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&mut self, stage: Stage, warning: &Warning) {
        self.diagnostics.push(Diagnostic {
            stage,
            severity: Severity::Warning,
            message: warning.to_string(),
        });
    }

    fn note(&mut self, stage: Stage, message: &str) {
        self.diagnostics.push(Diagnostic {
            stage,
            severity: Severity::Note,
            message: message.to_string(),
        });
    }

    fn fail(&mut self, stage: Stage, message: &str) {
        self.diagnostics.push(Diagnostic {
            stage,
            severity: Severity::Error,
            message: message.to_string(),
        });
    }
}
