//! Newsletter data model.
//!
//! Newsletter data is a YAML mapping from keys to scalars or single-level
//! groups:
//!
//! ```yaml
//! title: Spring Update
//! issue: 12
//! logo_path: assets/logo.png
//! colors:
//!   primary: "#112233"
//!   accent: "#ffcc00"
//! ```
//!
//! The reserved [`LOGO_PATH_KEY`] names the image embedded by
//! [`embed_logo`](crate::embed_logo); it never takes part in placeholder
//! substitution.

use std::path::PathBuf;

use serde_yaml::{Mapping, Value};

use crate::error::DataError;

/// Reserved top-level key naming the logo image to embed.
pub const LOGO_PATH_KEY: &str = "logo_path";

/// Structured data substituted into a newsletter template.
///
/// Entries keep the order in which they appear in the source document.
///
/// # Example
///
/// ```rust
/// use newsprint_render::NewsletterData;
///
/// let data = NewsletterData::from_yaml("title: Hello\ncolors:\n  primary: red\n").unwrap();
/// assert_eq!(data.len(), 2);
/// assert!(data.logo_path().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsletterData {
    entries: Mapping,
}

impl NewsletterData {
    /// Creates empty newsletter data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses newsletter data from a YAML document.
    ///
    /// An empty document yields empty data.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Parse`] for malformed YAML and
    /// [`DataError::NotAMapping`] when the top level is a scalar or sequence.
    pub fn from_yaml(yaml: &str) -> Result<Self, DataError> {
        match serde_yaml::from_str::<Value>(yaml)? {
            Value::Null => Ok(Self::new()),
            Value::Mapping(entries) => Ok(Self { entries }),
            other => Err(DataError::NotAMapping {
                found: kind_name(&other),
            }),
        }
    }

    /// Adds or replaces an entry, returning the updated data.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries
            .insert(Value::String(key.into()), value.into());
        self
    }

    /// Looks up a top-level entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Iterates over entries as `(key text, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &Value)> {
        self.entries.iter().map(|(k, v)| (format_value(k), v))
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the logo to embed, if one is configured.
    ///
    /// A `null` value counts as not configured.
    pub fn logo_path(&self) -> Option<PathBuf> {
        match self.get(LOGO_PATH_KEY)? {
            Value::Null => None,
            value => Some(PathBuf::from(format_value(value))),
        }
    }
}

/// Formats a data value as the text substituted into the template.
///
/// Strings are used verbatim, numbers use their canonical decimal form and
/// `null` becomes the empty string. Sequences and mappings render as compact
/// JSON, falling back to YAML when a key cannot be expressed in JSON.
///
/// ```rust
/// use newsprint_render::format_value;
/// use serde_yaml::Value;
///
/// assert_eq!(format_value(&Value::from(42)), "42");
/// assert_eq!(format_value(&Value::from(19.99)), "19.99");
/// assert_eq!(format_value(&Value::Null), "");
/// ```
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Tagged(tagged) => format_value(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => serde_json::to_string(value)
            .or_else(|_| serde_yaml::to_string(value).map(|s| s.trim_end().to_string()))
            .unwrap_or_default(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
