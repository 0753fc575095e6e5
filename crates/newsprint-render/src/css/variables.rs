//! CSS custom-property resolution.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::diagnostics::Outcome;

/// A custom-property declaration: `--name: value;`.
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"--([A-Za-z0-9_-]+):\s*([^;]+);").expect("declaration pattern is valid")
});

/// A custom-property usage without fallback: `var(--name)`.
static USAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"var\(\s*--([A-Za-z0-9_-]+)\s*\)").expect("usage pattern is valid")
});

/// Custom properties declared in a document, with references between them resolved.
///
/// Names are matched exactly: case and hyphens are significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariables {
    values: BTreeMap<String, String>,
}

impl CssVariables {
    /// Collects every `--name: value;` declaration in `text`.
    ///
    /// Values are trimmed. When a name is declared more than once, the last
    /// declaration wins. A value that uses another declared property is
    /// expanded; a reference cycle is left as written at the point it closes.
    pub fn extract(text: &str) -> Self {
        let mut declared = BTreeMap::new();
        for caps in DECLARATION.captures_iter(text) {
            declared.insert(caps[1].to_string(), caps[2].trim().to_string());
        }

        let mut values = BTreeMap::new();
        let mut stack = Vec::new();
        for name in declared.keys() {
            resolve(name, &declared, &mut values, &mut stack);
        }

        Self { values }
    }

    /// Literal value of `--name`, without the leading dashes.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Rewrites every `var(--name)` whose name is declared. Other usages are kept.
    pub fn apply(&self, text: &str) -> String {
        USAGE
            .replace_all(text, |caps: &Captures<'_>| match self.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

fn resolve(
    name: &str,
    declared: &BTreeMap<String, String>,
    resolved: &mut BTreeMap<String, String>,
    stack: &mut Vec<String>,
) -> Option<String> {
    if let Some(value) = resolved.get(name) {
        return Some(value.clone());
    }
    let raw = declared.get(name)?;
    if stack.iter().any(|n| n == name) {
        return None;
    }

    stack.push(name.to_string());
    let value = USAGE
        .replace_all(raw, |caps: &Captures<'_>| {
            resolve(&caps[1], declared, resolved, stack).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned();
    stack.pop();

    resolved.insert(name.to_string(), value.clone());
    Some(value)
}

/// Replaces `var(--name)` usages in `text` with their declared literal values.
///
/// Declarations stay in place. With no declarations the text is returned as
/// [`Outcome::Unchanged`]; undeclared usages are left verbatim.
pub fn resolve_css_variables(text: &str) -> Outcome {
    let variables = CssVariables::extract(text);
    if variables.is_empty() {
        return Outcome::Unchanged(text.to_string());
    }

    let resolved = variables.apply(text);
    if resolved == text {
        Outcome::Unchanged(resolved)
    } else {
        Outcome::Applied(resolved)
    }
}
