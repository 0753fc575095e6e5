//! Error types for newsletter rendering.
//!
//! Only two conditions are hard failures at this layer: data that cannot be
//! parsed into a newsletter mapping, and a CSS inliner that rejects its input.
//! Everything else a transform can run into is a recoverable
//! [`Warning`](crate::Warning) carried by an [`Outcome`](crate::Outcome).

/// Error returned when newsletter data cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The YAML document is malformed.
    #[error("failed to parse newsletter data: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document parsed, but its top level is not a mapping.
    #[error("newsletter data must be a mapping at the top level, found {found}")]
    NotAMapping { found: &'static str },
}

/// Error returned by a [`StyleInliner`](crate::css::StyleInliner).
#[derive(Debug, thiserror::Error)]
pub enum InlineError {
    /// The inlining backend could not process the document.
    #[error("{backend} could not inline styles: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },
}

impl InlineError {
    /// Create a backend error.
    pub fn backend(backend: &'static str, message: impl Into<String>) -> Self {
        Self::Backend {
            backend,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_mapping_display() {
        let err = DataError::NotAMapping { found: "a sequence" };
        assert_eq!(
            err.to_string(),
            "newsletter data must be a mapping at the top level, found a sequence"
        );
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        let err: DataError = yaml_err.into();
        assert!(matches!(err, DataError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse newsletter data"));
    }

    #[test]
    fn test_backend_error_display() {
        let err = InlineError::backend("css-inline", "unexpected token");
        assert_eq!(
            err.to_string(),
            "css-inline could not inline styles: unexpected token"
        );
    }
}
