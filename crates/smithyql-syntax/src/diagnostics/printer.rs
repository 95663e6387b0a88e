//! Rendering of a [`Diagnostics`] collection.
//!
//! With a source attached, each message becomes an annotated snippet:
//!
//! - the title carries the category as its id, e.g. `error[syntax]: ...`
//! - the primary span is labelled with the token that was found there
//! - related locations are secondary spans
//! - the expected terminals and any hints follow as notes
//! - a fix renders as a patch in its own group
//!
//! Without a source, each message is one `Display` line.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{Annotation, AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Fix, Severity};
use crate::parser::{SyntaxKind, TokenSet};

pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    /// File name shown in the snippet header.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let messages = self.diagnostics.sorted();
        let Some(source) = self.source else {
            for (i, diag) in messages.into_iter().enumerate() {
                if i > 0 {
                    w.write_char('\n')?;
                }
                write!(w, "{}", diag)?;
            }
            return Ok(());
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        for (i, diag) in messages.into_iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&self.report(diag, source)))?;
        }
        Ok(())
    }

    fn report<'a>(&'a self, diag: &'a DiagnosticMessage, source: &'a str) -> Vec<Group<'a>> {
        let mut snippet = Snippet::source(source)
            .line_start(1)
            .path(self.path)
            .annotation(primary(diag, source.len()));
        for related in &diag.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(clamp(related.range, source.len()))
                    .label(related.message.as_str()),
            );
        }

        let mut group = level(diag.severity)
            .primary_title(diag.message.as_str())
            .id(diag.category.as_str())
            .element(snippet);
        if let Some(expected) = expected_note(diag.expected) {
            group = group.element(Level::NOTE.message(expected));
        }
        for hint in &diag.hints {
            group = group.element(Level::HELP.message(hint.as_str()));
        }

        let mut report = vec![group];
        if let Some(fix) = &diag.fix {
            report.push(fix_group(fix, source));
        }
        report
    }
}

/// The offending span, labelled with what was found there when the parser knows.
fn primary(diag: &DiagnosticMessage, limit: usize) -> Annotation<'static> {
    let span = AnnotationKind::Primary.span(clamp(diag.range, limit));
    match diag.found {
        Some(SyntaxKind::Eof) | None => span,
        Some(found) => span.label(format!("found {}", found.describe())),
    }
}

fn expected_note(expected: TokenSet) -> Option<String> {
    let mut names = expected.iter().map(|kind| format!("`{}`", kind.name()));
    let first = names.next()?;
    let rest: Vec<_> = names.collect();
    if rest.is_empty() {
        return Some(format!("expected {first}"));
    }
    Some(format!("expected one of {first}, {}", rest.join(", ")))
}

fn fix_group<'a>(fix: &'a Fix, source: &'a str) -> Group<'a> {
    Level::HELP.secondary_title(fix.description.as_str()).element(
        Snippet::source(source)
            .line_start(1)
            .patch(Patch::new(fix.range.into(), fix.replacement.as_str())),
    )
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Zero-width ranges (end of input, a missing token) still need one column to point at.
fn clamp(range: TextRange, limit: usize) -> Range<usize> {
    let start = usize::from(range.start());
    let end = usize::from(range.end());
    if start == end {
        start..(start + 1).min(limit)
    } else {
        start..end
    }
}
