//! Rendering of compile errors as annotated source reports.
//!
//! The compiler itself only produces typed errors with spans;
//! presentation is the caller's concern, and this module is the plain
//! renderer for callers that want one.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::{Error, Span};

/// Span of the offending text, if the error carries one.
pub fn error_span(error: &Error) -> Option<Span> {
    match error {
        Error::Syntax { span }
        | Error::MalformedGuid { span }
        | Error::IllegalLeadingOperator { span }
        | Error::UnrecognizedToken { span }
        | Error::TabCharacter { span } => Some(span.clone()),
        Error::EmptyExpression => None,
    }
}

/// Render `error` as a plain-text report annotating `source`.
pub fn render_diagnostic(source: &str, error: &Error, path: Option<&str>) -> String {
    let renderer = Renderer::plain();
    let message = error.to_string();

    let Some(span) = error_span(error) else {
        let report: Vec<Group> = vec![Group::with_title(Level::ERROR.primary_title(&message))];
        return renderer.render(&report).to_string();
    };

    // Widen zero-width (end-of-input) spans to one visible column
    let start = span.start;
    let end = if span.start == span.end {
        (start + 1).min(source.len())
    } else {
        span.end
    };

    let mut snippet = Snippet::source(source)
        .line_start(1)
        .annotation(AnnotationKind::Primary.span(start..end).label(&message));
    if let Some(p) = path {
        snippet = snippet.path(p);
    }

    let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
    renderer.render(&report).to_string()
}
