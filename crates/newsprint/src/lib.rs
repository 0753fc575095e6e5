//! # Newsprint - Email Newsletter Builder
//!
//! Builds one self-contained HTML newsletter from three inputs:
//!
//! - an HTML template with `{{ placeholders }}` and CSS custom properties,
//! - a YAML data file,
//! - an optional logo image named by the data's `logo_path`.
//!
//! The result has the logo embedded as a `data:` URI, every known placeholder
//! filled in, every declared `var(--name)` replaced by its value, and (when an
//! inliner is available) style rules copied into `style` attributes.
//!
//! Missing inputs abort the run with a [`GenerateError`]. Problems the run can
//! survive, such as a missing logo, are reported to the
//! [`DiagnosticSink`](newsprint_render::DiagnosticSink) passed in by the caller.
//!
//! ## In-Memory Use
//!
//! ```rust
//! use newsprint::render_newsletter;
//! use newsprint_render::{CollectingSink, NewsletterData};
//!
//! let data = NewsletterData::from_yaml("title: Issue 7\n").unwrap();
//! let mut sink = CollectingSink::new();
//!
//! let html = render_newsletter("<h1>{{ title }}</h1>", &data, None, &mut sink).unwrap();
//! assert_eq!(html, "<h1>Issue 7</h1>");
//! ```

pub mod cli;
pub mod config;
mod error;
mod generator;
pub mod pipeline;

pub use config::{NewsletterPaths, NEWSLETTER_DATA, NEWSLETTER_OUTPUT, NEWSLETTER_TEMPLATE};
pub use error::GenerateError;
pub use generator::NewsletterGenerator;
pub use pipeline::render_newsletter;
