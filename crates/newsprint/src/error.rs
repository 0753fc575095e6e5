//! Error types for newsletter generation.

use std::io;
use std::path::PathBuf;

use newsprint_render::{DataError, InlineError};

/// Fatal errors that abort a generation run.
///
/// Conditions the run can survive (a missing logo, no inliner) are not errors;
/// they are reported as [`Warning`](newsprint_render::Warning)s instead.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// A required input file does not exist.
    #[error("{description} {} does not exist", .path.display())]
    Missing {
        description: &'static str,
        path: PathBuf,
    },

    /// A required input path exists but is not a regular file.
    #[error("{description} {} is not a file", .path.display())]
    NotAFile {
        description: &'static str,
        path: PathBuf,
    },

    /// A required input file could not be read.
    #[error("failed to read {description} {}: {source}", .path.display())]
    Read {
        description: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data file is not valid newsletter data.
    #[error("invalid data file {}: {source}", .path.display())]
    Data {
        path: PathBuf,
        #[source]
        source: DataError,
    },

    /// The CSS inliner rejected the document.
    #[error(transparent)]
    Inline(#[from] InlineError),

    /// The finished newsletter could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_names_path() {
        let err = GenerateError::Missing {
            description: "HTML template",
            path: PathBuf::from("newsletter_template.html"),
        };
        assert_eq!(
            err.to_string(),
            "HTML template newsletter_template.html does not exist"
        );
    }

    #[test]
    fn test_not_a_file_names_path() {
        let err = GenerateError::NotAFile {
            description: "Data file",
            path: PathBuf::from("data"),
        };
        assert_eq!(err.to_string(), "Data file data is not a file");
    }

    #[test]
    fn test_inline_error_is_transparent() {
        let err: GenerateError = InlineError::backend("stub", "boom").into();
        assert_eq!(err.to_string(), "stub could not inline styles: boom");
    }
}
