//! Input and output locations.

use std::path::{Path, PathBuf};

/// Default template file name, relative to the working directory.
pub const NEWSLETTER_TEMPLATE: &str = "newsletter_template.html";

/// Default output file name, relative to the working directory.
pub const NEWSLETTER_OUTPUT: &str = "newsletter_ready.html";

/// Default data file name, relative to the working directory.
pub const NEWSLETTER_DATA: &str = "newsletter_data.yaml";

/// Where a generation run reads its inputs and writes its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterPaths {
    pub template: PathBuf,
    pub output: PathBuf,
    pub data: PathBuf,
}

impl NewsletterPaths {
    /// Creates paths from anything path-like.
    pub fn new(
        template: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        data: impl Into<PathBuf>,
    ) -> Self {
        Self {
            template: template.into(),
            output: output.into(),
            data: data.into(),
        }
    }

    /// Creates paths from string slices.
    pub fn from_strings(template: &str, output: &str, data: &str) -> Self {
        Self::new(template, output, data)
    }

    /// Places all three default file names in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(NEWSLETTER_TEMPLATE),
            dir.join(NEWSLETTER_OUTPUT),
            dir.join(NEWSLETTER_DATA),
        )
    }
}

impl Default for NewsletterPaths {
    fn default() -> Self {
        Self::from_strings(NEWSLETTER_TEMPLATE, NEWSLETTER_OUTPUT, NEWSLETTER_DATA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let paths = NewsletterPaths::default();
        assert_eq!(paths.template, PathBuf::from("newsletter_template.html"));
        assert_eq!(paths.output, PathBuf::from("newsletter_ready.html"));
        assert_eq!(paths.data, PathBuf::from("newsletter_data.yaml"));
    }

    #[test]
    fn test_in_dir() {
        let paths = NewsletterPaths::in_dir("/tmp/issue-12");
        assert_eq!(
            paths.data,
            PathBuf::from("/tmp/issue-12/newsletter_data.yaml")
        );
    }
}
