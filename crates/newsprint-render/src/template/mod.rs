//! Placeholder substitution for newsletter templates.
//!
//! Templates mark substitution sites with double-brace tokens:
//!
//! - `{{ title }}` - top-level value
//! - `{{ colors.primary }}` - value inside a single-level group
//!
//! Whitespace inside the braces is optional. Substitution is plain text
//! replacement, not a template language: there are no loops, filters, or
//! escapes, and tokens naming keys absent from the data are left as written.
//!
//! # Example
//!
//! ```rust
//! use newsprint_render::{substitute_placeholders, NewsletterData};
//!
//! let data = NewsletterData::from_yaml("name: World\ncolors:\n  fg: '#000'\n").unwrap();
//! let output = substitute_placeholders("Hello, {{ name }}! {{colors.fg}} {{ other }}", &data);
//!
//! assert_eq!(output, "Hello, World! #000 {{ other }}");
//! ```

mod placeholder;

pub use placeholder::{substitute_placeholders, PlaceholderTable};
