//! File-backed newsletter generation.

use std::fs;
use std::path::Path;

use newsprint_render::{DiagnosticSink, NewsletterData, Stage, StyleInliner};

use crate::config::NewsletterPaths;
use crate::error::GenerateError;
use crate::pipeline;

/// Reads the template and data, runs the pipeline, and writes the result.
///
/// # Example
///
/// ```rust,no_run
/// use newsprint::{NewsletterGenerator, NewsletterPaths};
/// use newsprint_render::TracingSink;
///
/// let generator = NewsletterGenerator::new(NewsletterPaths::default());
/// let written = generator.generate(&mut TracingSink).unwrap();
/// println!("wrote {}", written.display());
/// ```
pub struct NewsletterGenerator {
    paths: NewsletterPaths,
    inliner: Option<Box<dyn StyleInliner>>,
}

impl NewsletterGenerator {
    /// Creates a generator using the default inliner, if one is compiled in.
    pub fn new(paths: NewsletterPaths) -> Self {
        Self {
            paths,
            inliner: default_inliner(),
        }
    }

    /// Uses `inliner` for the CSS inlining step.
    pub fn with_inliner(mut self, inliner: impl StyleInliner + 'static) -> Self {
        self.inliner = Some(Box::new(inliner));
        self
    }

    /// Disables CSS inlining; style rules stay in the `<style>` block.
    pub fn without_inliner(mut self) -> Self {
        self.inliner = None;
        self
    }

    /// Returns `true` if the inlining step has a backend.
    pub fn has_inliner(&self) -> bool {
        self.inliner.is_some()
    }

    /// Reads the HTML template.
    pub fn read_html_template(&self) -> Result<String, GenerateError> {
        read_required(&self.paths.template, "HTML template")
    }

    /// Reads and parses the newsletter data.
    pub fn read_newsletter_data(&self) -> Result<NewsletterData, GenerateError> {
        let yaml = read_required(&self.paths.data, "Data file")?;
        NewsletterData::from_yaml(&yaml).map_err(|source| GenerateError::Data {
            path: self.paths.data.clone(),
            source,
        })
    }

    /// Loads the inputs, embeds the logo, and substitutes placeholders.
    pub fn prepare_html(&self, sink: &mut dyn DiagnosticSink) -> Result<String, GenerateError> {
        let inputs = self
            .read_html_template()
            .and_then(|template| Ok((template, self.read_newsletter_data()?)));
        let (template, data) = record_failure(Stage::Prepare, sink, inputs)?;
        sink.note(Stage::Load, "Template and data loaded");

        let html = pipeline::prepare(&template, &data, sink);
        sink.note(Stage::Prepare, "HTML preparation completed successfully");
        Ok(html)
    }

    /// Replaces CSS variables with their literal values.
    pub fn replace_css_variables(&self, html: String, sink: &mut dyn DiagnosticSink) -> String {
        let html = pipeline::resolve_variables(html, sink);
        sink.note(
            Stage::CssVariables,
            "CSS variable replacement completed successfully",
        );
        html
    }

    /// Converts style rules to inline styles, if an inliner is configured.
    pub fn inline_css(
        &self,
        html: String,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<String, GenerateError> {
        let inlined =
            pipeline::inline(html, self.inliner.as_deref(), sink).map_err(GenerateError::from);
        let html = record_failure(Stage::Inline, sink, inlined)?;
        sink.note(Stage::Inline, "CSS inlining completed successfully");
        Ok(html)
    }

    /// Produces the finished document without writing it.
    pub fn render(&self, sink: &mut dyn DiagnosticSink) -> Result<String, GenerateError> {
        let html = self.prepare_html(sink)?;
        let html = self.replace_css_variables(html, sink);
        self.inline_css(html, sink)
    }

    /// Writes `html` to the output path.
    pub fn save_html(&self, html: &str, sink: &mut dyn DiagnosticSink) -> Result<(), GenerateError> {
        let written = fs::write(&self.paths.output, html).map_err(|source| GenerateError::Write {
            path: self.paths.output.clone(),
            source,
        });
        record_failure(Stage::Save, sink, written)?;
        sink.note(Stage::Save, "HTML saving completed successfully");
        Ok(())
    }

    /// Renders the newsletter and writes it, returning the output path.
    pub fn generate(&self, sink: &mut dyn DiagnosticSink) -> Result<&Path, GenerateError> {
        let result = self
            .render(sink)
            .and_then(|html| self.save_html(&html, sink));
        record_failure(Stage::Generate, sink, result)?;
        sink.note(Stage::Generate, "Newsletter generation completed successfully");
        Ok(self.paths.output.as_path())
    }
}

impl std::fmt::Debug for NewsletterGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsletterGenerator")
            .field("paths", &self.paths)
            .field("inliner", &self.inliner.as_ref().map(|i| i.name()))
            .finish()
    }
}

#[cfg(feature = "css-inline")]
fn default_inliner() -> Option<Box<dyn StyleInliner>> {
    Some(Box::new(newsprint_render::CssInliner::new()))
}

#[cfg(not(feature = "css-inline"))]
fn default_inliner() -> Option<Box<dyn StyleInliner>> {
    None
}

/// Reports a failed stage to `sink` and hands the result back unchanged.
fn record_failure<T>(
    stage: Stage,
    sink: &mut dyn DiagnosticSink,
    result: Result<T, GenerateError>,
) -> Result<T, GenerateError> {
    if let Err(err) = &result {
        sink.fail(stage, &format!("{stage} failed: {err}"));
    }
    result
}

/// Reads a file that must exist, distinguishing missing paths from non-files.
fn read_required(path: &Path, description: &'static str) -> Result<String, GenerateError> {
    if !path.exists() {
        return Err(GenerateError::Missing {
            description,
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(GenerateError::NotAFile {
            description,
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|source| GenerateError::Read {
        description,
        path: path.to_path_buf(),
        source,
    })
}
