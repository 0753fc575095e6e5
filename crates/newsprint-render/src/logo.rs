//! Logo embedding.
//!
//! Email clients routinely block external images, so the newsletter logo is
//! shipped inside the document as a `data:` URI. The template marks the spot
//! with an image whose `src` is empty, placed inside a logo container:
//!
//! ```html
//! <div class="logo-container">
//!   <img src="" alt="Company logo" width="120">
//! </div>
//! ```
//!
//! Only the first such image in the first container that has one is
//! rewritten. The search for the image never runs past the start of the next
//! logo container. Closing `</div>` tags are not tracked, so a container whose
//! own markup has no empty image lends its region to whatever follows it.

use std::fs;
use std::ops::Range;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::data::NewsletterData;
use crate::diagnostics::{Outcome, Warning};

/// MIME type declared for every embedded logo. The image format is not checked.
pub const LOGO_MIME: &str = "image/png";

/// Opening tag of a `div` whose class list contains `logo-container`.
static LOGO_CONTAINER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)<div\b[^>]*?\sclass\s*=\s*(?:"(?:[^"]*\s)?logo-container(?:\s[^"]*)?"|'(?:[^']*\s)?logo-container(?:\s[^']*)?')[^>]*>"#,
    )
    .expect("logo container pattern is valid")
});

/// An `img` tag carrying an empty `src` attribute.
static EMPTY_SRC_IMG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img\b[^>]*?\ssrc\s*=\s*(?:""|'')[^>]*>"#)
        .expect("image tag pattern is valid")
});

/// The empty `src` attribute itself, with the whitespace that precedes it.
static EMPTY_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(\s)src\s*=\s*(?:""|'')"#).expect("src attribute pattern is valid")
});

/// Embeds the logo named by the data's `logo_path` into `html`.
///
/// Returns [`Outcome::Unchanged`] when no logo is configured, and
/// [`Outcome::Skipped`] when the file cannot be used or the template has no
/// place to put it.
pub fn embed_logo(html: &str, data: &NewsletterData) -> Outcome {
    let Some(path) = data.logo_path() else {
        return Outcome::Unchanged(html.to_string());
    };

    match read_logo(&path) {
        Ok(bytes) => embed_logo_bytes(html, &bytes),
        Err(warning) => Outcome::Skipped {
            html: html.to_string(),
            warning,
        },
    }
}

/// Embeds already loaded image bytes into `html`.
pub fn embed_logo_bytes(html: &str, bytes: &[u8]) -> Outcome {
    let Some(tag) = find_logo_img(html) else {
        return Outcome::Skipped {
            html: html.to_string(),
            warning: Warning::LogoElementMissing,
        };
    };

    let data_uri = logo_data_uri(bytes);
    let rewritten = EMPTY_SRC.replacen(&html[tag.clone()], 1, |caps: &regex::Captures<'_>| {
        format!(r#"{}src="{}""#, &caps[1], data_uri)
    });

    let mut out = String::with_capacity(html.len() + data_uri.len());
    out.push_str(&html[..tag.start]);
    out.push_str(&rewritten);
    out.push_str(&html[tag.end..]);
    Outcome::Applied(out)
}

/// Encodes image bytes as a PNG data URI (standard alphabet, no line wrapping).
///
/// ```rust
/// use newsprint_render::logo_data_uri;
///
/// assert_eq!(logo_data_uri(b"abc"), "data:image/png;base64,YWJj");
/// ```
pub fn logo_data_uri(bytes: &[u8]) -> String {
    format!("data:{LOGO_MIME};base64,{}", B64.encode(bytes))
}

/// Byte range of the image tag that receives the logo, if any.
///
/// Each container owns the text up to the next container's opening tag, or the
/// end of the document, even past its own closing `</div>`.
fn find_logo_img(html: &str) -> Option<Range<usize>> {
    let containers: Vec<Range<usize>> = LOGO_CONTAINER
        .find_iter(html)
        .map(|m| m.range())
        .collect();

    containers.iter().enumerate().find_map(|(i, container)| {
        let region_end = containers
            .get(i + 1)
            .map_or(html.len(), |next| next.start);
        let region = &html[container.end..region_end];
        EMPTY_SRC_IMG
            .find(region)
            .map(|m| container.end + m.start()..container.end + m.end())
    })
}

fn read_logo(path: &Path) -> Result<Vec<u8>, Warning> {
    if !path.is_file() {
        return Err(Warning::LogoMissing {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| Warning::LogoUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.is_empty() {
        return Err(Warning::LogoEmpty {
            path: path.to_path_buf(),
        });
    }

    Ok(bytes)
}
