//! # Newsprint Render - Email-Safe Newsletter Transforms
//!
//! `newsprint-render` turns an HTML newsletter template and a YAML data file
//! into a single self-contained document that survives email clients.
//!
//! This crate holds the text transforms. Reading and writing files, and the
//! command line, live in the `newsprint` crate.
//!
//! ## Transforms
//!
//! Applied in this order by the pipeline:
//!
//! | Step | Function | Effect |
//! |------|----------|--------|
//! | Logo | [`embed_logo`] | Empty `src` of the logo image becomes a base64 `data:` URI |
//! | Placeholders | [`substitute_placeholders`] | `{{ key }}` and `{{ group.key }}` replaced with data values |
//! | CSS variables | [`resolve_css_variables`] | `var(--name)` replaced with the declared literal |
//! | Inlining | [`StyleInliner`] | Style rules copied into `style` attributes |
//!
//! ## Recoverable Failures
//!
//! A missing logo file or a template without a logo slot should not stop a
//! newsletter from going out. Transforms report such conditions as an
//! [`Outcome::Skipped`] carrying a [`Warning`], and hand back the input text.
//! Callers route warnings to a [`DiagnosticSink`] of their choice:
//! [`TracingSink`] for logs, [`CollectingSink`] for inspection.
//!
//! ## Quick Start
//!
//! ```rust
//! use newsprint_render::{
//!     embed_logo, resolve_css_variables, substitute_placeholders, CollectingSink,
//!     NewsletterData, Stage,
//! };
//!
//! let template = r#"<style>:root { --accent: {{ colors.accent }}; } h1 { color: var(--accent); }</style>
//! <h1>{{ title }}</h1>"#;
//!
//! let data = NewsletterData::from_yaml("title: Spring Update\ncolors:\n  accent: '#ff6600'\n").unwrap();
//! let mut sink = CollectingSink::new();
//!
//! let html = embed_logo(template, &data).report(Stage::Logo, &mut sink);
//! let html = substitute_placeholders(&html, &data);
//! let html = resolve_css_variables(&html).report(Stage::CssVariables, &mut sink);
//!
//! assert!(html.contains("h1 { color: #ff6600; }"));
//! assert!(html.contains("<h1>Spring Update</h1>"));
//! assert!(sink.diagnostics().is_empty());
//! ```

pub mod css;
mod data;
mod diagnostics;
mod error;
mod logo;
pub mod template;

// Error types
pub use error::{DataError, InlineError};

// Data model
pub use data::{format_value, NewsletterData, LOGO_PATH_KEY};

// Diagnostics
pub use diagnostics::{
    CollectingSink, Diagnostic, DiagnosticSink, Outcome, Severity, Stage, TracingSink, Warning,
};

// Transforms
pub use css::{resolve_css_variables, CssVariables, StyleInliner};
pub use logo::{embed_logo, embed_logo_bytes, logo_data_uri, LOGO_MIME};
pub use template::{substitute_placeholders, PlaceholderTable};

#[cfg(feature = "css-inline")]
pub use css::CssInliner;
