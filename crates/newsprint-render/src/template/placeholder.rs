//! Token table and single-pass substitution.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_yaml::Value;

use crate::data::{format_value, NewsletterData, LOGO_PATH_KEY};

/// Matches `{{ key }}` with optional inner whitespace. Keys cannot contain braces.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}").expect("placeholder pattern is valid"));

/// Flattened lookup from placeholder key to replacement text.
///
/// Top-level scalars map under their own key. A group (mapping value)
/// contributes one `parent.sub` entry per inner key and nothing under the
/// parent key itself. Groups inside groups are not traversed; `parent.sub`
/// then renders the inner group's textual form. The reserved logo key is
/// never included.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderTable {
    entries: HashMap<String, String>,
}

impl PlaceholderTable {
    /// Builds the table for `data`.
    pub fn from_data(data: &NewsletterData) -> Self {
        let mut entries = HashMap::new();

        for (key, value) in data.iter() {
            if key == LOGO_PATH_KEY {
                continue;
            }

            match value {
                Value::Mapping(group) => {
                    for (sub_key, sub_value) in group {
                        entries.insert(
                            format!("{}.{}", key, format_value(sub_key)),
                            format_value(sub_value),
                        );
                    }
                }
                _ => {
                    entries.insert(key, format_value(value));
                }
            }
        }

        Self { entries }
    }

    /// Replacement text for `key`, if the data defines it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of substitutable keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key can be substituted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces every known placeholder in `template`.
    ///
    /// The template is scanned once, left to right. Each match covers the whole
    /// token including its braces, and replacement text is never scanned again,
    /// so the order of keys in the data cannot change the result.
    pub fn substitute(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures<'_>| match self.get(&caps[1]) {
                Some(text) => text.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// Keys of placeholders in `template` that this table cannot resolve,
    /// in order of first appearance.
    pub fn unresolved(&self, template: &str) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(template) {
            let key = &caps[1];
            if self.get(key).is_none() && !missing.iter().any(|k| k == key) {
                missing.push(key.to_string());
            }
        }
        missing
    }
}

/// Replaces `{{ key }}` and `{{ parent.sub }}` placeholders with values from `data`.
///
/// Unknown placeholders pass through unchanged.
pub fn substitute_placeholders(template: &str, data: &NewsletterData) -> String {
    PlaceholderTable::from_data(data).substitute(template)
}
