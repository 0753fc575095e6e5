//! In-memory newsletter pipeline.
//!
//! Each function takes the document produced by the previous step. Warnings
//! and progress notes go to the supplied [`DiagnosticSink`]; only a failing
//! inliner can abort the pipeline.

use newsprint_render::{
    embed_logo, resolve_css_variables, DiagnosticSink, InlineError, NewsletterData, Outcome,
    PlaceholderTable, Stage, StyleInliner, Warning,
};

/// Embeds the logo and substitutes placeholders.
pub fn prepare(template: &str, data: &NewsletterData, sink: &mut dyn DiagnosticSink) -> String {
    let logo = embed_logo(template, data);
    if logo.is_applied() {
        if let Some(path) = data.logo_path() {
            sink.note(
                Stage::Logo,
                &format!("Embedded logo '{}' as base64", path.display()),
            );
        }
    }
    let html = logo.report(Stage::Logo, sink);

    let table = PlaceholderTable::from_data(data);
    let html = table.substitute(&html);

    let unresolved = table.unresolved(&html);
    if unresolved.is_empty() {
        sink.note(Stage::Placeholders, "Placeholders replaced with newsletter data");
    } else {
        sink.note(
            Stage::Placeholders,
            &format!(
                "Placeholders replaced; left for downstream handling: {}",
                unresolved.join(", ")
            ),
        );
    }

    html
}

/// Rewrites `var(--name)` usages to their declared values.
pub fn resolve_variables(html: String, sink: &mut dyn DiagnosticSink) -> String {
    match resolve_css_variables(&html) {
        Outcome::Applied(resolved) => {
            sink.note(Stage::CssVariables, "CSS variable usages replaced with declared values");
            resolved
        }
        Outcome::Unchanged(_) => {
            sink.note(Stage::CssVariables, "No CSS variables found to replace");
            html
        }
        skipped => skipped.report(Stage::CssVariables, sink),
    }
}

/// Inlines style rules with `inliner`, or passes the document through when
/// there is none.
///
/// # Errors
///
/// Returns the inliner's error unchanged.
pub fn inline(
    html: String,
    inliner: Option<&dyn StyleInliner>,
    sink: &mut dyn DiagnosticSink,
) -> Result<String, InlineError> {
    let Some(inliner) = inliner else {
        let outcome = Outcome::Skipped {
            html,
            warning: Warning::InlinerUnavailable,
        };
        return Ok(outcome.report(Stage::Inline, sink));
    };

    let inlined = inliner.inline_styles(&html)?;
    sink.note(
        Stage::Inline,
        &format!("Styles inlined with {}", inliner.name()),
    );
    Ok(inlined)
}

/// Runs every step on an in-memory template.
///
/// # Errors
///
/// Fails only if the inliner fails.
pub fn render_newsletter(
    template: &str,
    data: &NewsletterData,
    inliner: Option<&dyn StyleInliner>,
    sink: &mut dyn DiagnosticSink,
) -> Result<String, InlineError> {
    let html = prepare(template, data, sink);
    let html = resolve_variables(html, sink);
    inline(html, inliner, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsprint_render::{CollectingSink, Severity};

    struct Failing;

    impl StyleInliner for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn inline_styles(&self, _html: &str) -> Result<String, InlineError> {
            Err(InlineError::backend("failing", "bad markup"))
        }
    }

    struct Tagging;

    impl StyleInliner for Tagging {
        fn name(&self) -> &'static str {
            "tagging"
        }

        fn inline_styles(&self, html: &str) -> Result<String, InlineError> {
            Ok(format!("<!-- inlined -->{html}"))
        }
    }

    #[test]
    fn test_round_trip_without_constructs() {
        let template = "<html><body><p>Plain newsletter</p></body></html>";
        let data = NewsletterData::from_yaml("title: unused\n").unwrap();
        let mut sink = CollectingSink::new();

        let html = render_newsletter(template, &data, Some(&Tagging), &mut sink).unwrap();

        assert_eq!(html, format!("<!-- inlined -->{template}"));
        assert_eq!(sink.warnings().count(), 0);
    }

    #[test]
    fn test_no_inliner_keeps_style_block() {
        let template = "<style>--c: red; p { color: var(--c); }</style><p>x</p>";
        let mut sink = CollectingSink::new();

        let html = render_newsletter(template, &NewsletterData::new(), None, &mut sink).unwrap();

        assert_eq!(html, "<style>--c: red; p { color: red; }</style><p>x</p>");
        assert!(sink.warned(Stage::Inline));
    }

    #[test]
    fn test_inliner_error_propagates() {
        let mut sink = CollectingSink::new();
        let result = render_newsletter("<p/>", &NewsletterData::new(), Some(&Failing), &mut sink);
        assert!(result.is_err());
    }

    #[test]
    fn test_placeholders_before_variables() {
        let template = "<style>:root { --accent: {{ colors.accent }}; } a { color: var(--accent); }</style>";
        let data = NewsletterData::from_yaml("colors:\n  accent: '#0af'\n").unwrap();
        let mut sink = CollectingSink::new();

        let html = render_newsletter(template, &data, None, &mut sink).unwrap();

        assert_eq!(
            html,
            "<style>:root { --accent: #0af; } a { color: #0af; }</style>"
        );
    }

    #[test]
    fn test_variable_notes_follow_outcome() {
        let mut sink = CollectingSink::new();
        let html = resolve_variables("<p style=\"color: red\">x</p>".to_string(), &mut sink);
        assert_eq!(html, "<p style=\"color: red\">x</p>");
        assert_eq!(sink.diagnostics()[0].message, "No CSS variables found to replace");

        let mut sink = CollectingSink::new();
        let html = resolve_variables("--c: red; a { color: var(--c); }".to_string(), &mut sink);
        assert_eq!(html, "--c: red; a { color: red; }");
        assert!(sink.diagnostics()[0].message.contains("replaced"));
        assert_eq!(sink.warnings().count(), 0);
    }

    #[test]
    fn test_unresolved_placeholders_are_noted_not_warned() {
        let mut sink = CollectingSink::new();
        let html = prepare("{{ who }}", &NewsletterData::new(), &mut sink);

        assert_eq!(html, "{{ who }}");
        assert_eq!(sink.warnings().count(), 0);
        assert!(sink
            .diagnostics()
            .iter()
            .any(|d| d.severity == Severity::Note && d.message.contains("who")));
    }

    #[test]
    fn test_missing_logo_warns_and_continues() {
        let template = r#"<div class="logo-container"><img src="" alt="logo"></div><h1>{{ title }}</h1>"#;
        let data = NewsletterData::from_yaml("title: Hi\nlogo_path: /definitely/missing.png\n").unwrap();
        let mut sink = CollectingSink::new();

        let html = prepare(template, &data, &mut sink);

        assert_eq!(
            html,
            r#"<div class="logo-container"><img src="" alt="logo"></div><h1>Hi</h1>"#
        );
        assert!(sink.warned(Stage::Logo));
    }
}
