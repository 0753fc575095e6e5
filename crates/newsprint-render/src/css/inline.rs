//! Style inlining seam.
//!
//! Inlining is delegated to a [`StyleInliner`]. The pipeline treats a missing
//! inliner as a normal configuration: the document keeps its `<style>` block
//! and only custom properties are resolved.

use crate::error::InlineError;

/// Moves stylesheet rules into per-element `style` attributes.
pub trait StyleInliner {
    /// Short backend name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Returns `html` with its style rules inlined.
    fn inline_styles(&self, html: &str) -> Result<String, InlineError>;
}

impl<T: StyleInliner + ?Sized> StyleInliner for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn inline_styles(&self, html: &str) -> Result<String, InlineError> {
        (**self).inline_styles(html)
    }
}

/// [`StyleInliner`] backed by the `css-inline` crate.
///
/// `<style>` tags are kept in the output as a fallback for clients that
/// honour them, class attributes are left alone, and remote stylesheets are
/// never fetched.
#[cfg(feature = "css-inline")]
pub struct CssInliner {
    inner: css_inline::CSSInliner<'static>,
}

#[cfg(feature = "css-inline")]
impl CssInliner {
    /// Creates an inliner configured for email output.
    pub fn new() -> Self {
        Self {
            inner: css_inline::CSSInliner::options()
                .keep_style_tags(true)
                .load_remote_stylesheets(false)
                .build(),
        }
    }
}

#[cfg(feature = "css-inline")]
impl Default for CssInliner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "css-inline")]
impl std::fmt::Debug for CssInliner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CssInliner").finish_non_exhaustive()
    }
}

#[cfg(feature = "css-inline")]
impl StyleInliner for CssInliner {
    fn name(&self) -> &'static str {
        "css-inline"
    }

    fn inline_styles(&self, html: &str) -> Result<String, InlineError> {
        self.inner
            .inline(html)
            .map_err(|e| InlineError::backend(self.name(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl StyleInliner for Upper {
        fn name(&self) -> &'static str {
            "upper"
        }

        fn inline_styles(&self, html: &str) -> Result<String, InlineError> {
            Ok(html.to_uppercase())
        }
    }

    #[test]
    fn test_boxed_inliner_delegates() {
        let boxed: Box<dyn StyleInliner> = Box::new(Upper);
        assert_eq!(boxed.name(), "upper");
        assert_eq!(boxed.inline_styles("<p>").unwrap(), "<P>");
    }

    #[cfg(feature = "css-inline")]
    #[test]
    fn test_css_inliner_applies_rules() {
        let html = "<html><head><style>p { color: red; }</style></head><body><p>Hi</p></body></html>";
        let out = CssInliner::new().inline_styles(html).unwrap();
        assert!(out.contains(r#"<p style="color"#), "{out}");
        assert!(out.contains("red"), "{out}");
        assert!(out.contains("<style>"), "{out}");
    }
}
