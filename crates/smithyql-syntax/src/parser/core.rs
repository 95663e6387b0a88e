//! Parser state machine and low-level operations.
//!
//! Tokens are pulled from the lexer one at a time under the parser's current
//! [`LexContext`]. Trivia is buffered while peeking and flushed into the tree when a
//! node starts or a token is consumed.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::Parse;
use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{LexContext, Token, lex_token, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Literal nesting allowed before the parser stops descending.
pub const DEFAULT_RECURSION_LIMIT: u32 = 128;

/// How many significant tokens recovery looks ahead for a synchronization point.
pub const DEFAULT_RESYNC_WINDOW: usize = 8;

const DEBUG_FUEL: u32 = 256;

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Hand-written recursive descent parser producing a lossless rowan tree.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    /// Offset just past the last consumed or buffered token.
    cursor: TextSize,
    /// End of the last token added to the tree.
    last_end: TextSize,
    context: LexContext,
    /// Significant token at `cursor`, and the context it was lexed in.
    lookahead: Option<(LexContext, Token)>,
    trivia_buffer: Vec<Token>,
    builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    depth: u32,
    last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    recursion_limit: Option<u32>,
    pub(super) resync_window: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            cursor: TextSize::from(0),
            last_end: TextSize::from(0),
            context: LexContext::default(),
            lookahead: None,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            delimiter_stack: Vec::with_capacity(8),
            debug_fuel: std::cell::Cell::new(DEBUG_FUEL),
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
            resync_window: DEFAULT_RESYNC_WINDOW,
        }
    }

    /// `None` removes the limit; deep enough input can then overflow the stack.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn with_resync_window(mut self, window: usize) -> Self {
        self.resync_window = window.max(1);
        self
    }

    #[tracing::instrument(level = "debug", skip_all, fields(source_len = self.source.len()))]
    pub fn parse(mut self) -> Parse {
        self.parse_source_file();
        let (green, diagnostics) = self.finish();
        tracing::debug!(diagnostics = diagnostics.len(), "parsed");
        Parse::new(green, diagnostics)
    }

    fn finish(mut self) -> (GreenNode, Diagnostics) {
        self.drain_trivia();
        (self.builder.finish(), self.diagnostics)
    }

    /// Sets the context used to lex the next significant token.
    pub(super) fn lex_as(&mut self, context: LexContext) {
        self.context = context;
    }

    pub(super) fn current_token(&mut self) -> Token {
        self.ensure_progress();
        if let Some((context, token)) = self.lookahead
            && context == self.context
        {
            return token;
        }
        loop {
            let token = lex_token(self.source, self.cursor, self.context);
            if token.kind.is_trivia() {
                self.trivia_buffer.push(token);
                self.cursor = token.span.end();
                continue;
            }
            self.lookahead = Some((self.context, token));
            return token;
        }
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.current_token().kind
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.current_token().span
    }

    pub(super) fn eof(&mut self) -> bool {
        self.current() == SyntaxKind::Eof
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Kind of the `n`-th significant token from here (0 = current), lexed under `context`.
    /// Past the end this is always `Eof`.
    pub(super) fn peek_nth(&mut self, n: usize, context: LexContext) -> SyntaxKind {
        self.peek_token(n, context).kind
    }

    fn peek_token(&mut self, n: usize, context: LexContext) -> Token {
        self.current_token();
        let mut offset = self.cursor;
        let mut seen = 0;
        loop {
            let token = lex_token(self.source, offset, context);
            if token.kind == SyntaxKind::Eof {
                return token;
            }
            if !token.kind.is_trivia() {
                if seen == n {
                    return token;
                }
                seen += 1;
            }
            offset = token.span.end();
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    /// The root owns everything, leading trivia included.
    pub(super) fn start_root(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    /// Leading trivia stays outside the new node.
    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.current_token();
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.current_token();
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        let token = self.current_token();
        assert!(token.kind != SyntaxKind::Eof, "bump called at EOF");
        self.reset_debug_fuel();

        self.drain_trivia();

        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.cursor = token.span.end();
        self.last_end = token.span.end();
        self.lookahead = None;
    }

    pub(super) fn last_consumed_end(&self) -> TextSize {
        self.last_end
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(DEBUG_FUEL);
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    pub(super) fn bump_as_error(&mut self) {
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Reports `kind` at the current token, recording what was found there.
    pub(super) fn error_expected(&mut self, kind: DiagnosticKind, expected: TokenSet) {
        let token = self.current_token();
        if !self.should_report(token.span.start()) {
            return;
        }
        self.diagnostics
            .report(kind, token.span)
            .message(token.kind.describe())
            .found(token.kind)
            .expected(expected)
            .emit();
    }

    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn error_with_fix(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        fix_range: TextRange,
        fix_description: impl Into<String>,
        fix_replacement: impl Into<String>,
    ) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics
            .report(kind, range)
            .fix_at(fix_range, fix_description, fix_replacement)
            .emit();
    }

    /// Reports a lexer error token. Returns `false` for any other token.
    pub(super) fn report_lexical(&mut self, token: Token) -> bool {
        let kind = match token.kind {
            SyntaxKind::Garbage => DiagnosticKind::UnexpectedCharacter,
            SyntaxKind::UnterminatedString => DiagnosticKind::UnterminatedString,
            _ => return false,
        };
        if !self.should_report(token.span.start()) {
            return true;
        }
        let mut builder = self.diagnostics.report(kind, token.span).found(token.kind);
        if kind == DiagnosticKind::UnexpectedCharacter {
            builder = builder.message(token_text(self.source, &token));
        }
        builder.emit();
        true
    }

    /// Reports the current token as not belonging here.
    pub(super) fn error_unexpected(&mut self, expected: TokenSet) {
        let token = self.current_token();
        if self.report_lexical(token) {
            return;
        }
        self.error_expected(DiagnosticKind::UnexpectedToken, expected);
    }

    /// Skips the current token plus everything up to the first `stop` token visible within
    /// the resync window, wrapped in one `Error` node. Without a visible stop token only
    /// the current token is skipped.
    pub(super) fn recover_until(&mut self, stop: TokenSet) {
        let count = self.distance_to(stop).unwrap_or(1);
        self.skip_as_error(count);
    }

    /// How many significant tokens precede the first `stop` token (or end of input) after
    /// the current one, if it lies within the resync window.
    fn distance_to(&mut self, stop: TokenSet) -> Option<usize> {
        let context = self.context;
        let mut offset = self.current_token().span.end();
        let mut distance = 1;
        while distance < self.resync_window {
            let token = lex_token(self.source, offset, context);
            if token.kind == SyntaxKind::Eof || stop.contains(token.kind) {
                return Some(distance);
            }
            if !token.kind.is_trivia() {
                distance += 1;
            }
            offset = token.span.end();
        }
        None
    }

    /// Wraps the next `count` significant tokens in one `Error` node.
    pub(super) fn skip_as_error(&mut self, count: usize) {
        if self.eof() {
            return;
        }
        let start = self.current_span().start();
        self.start_node(SyntaxKind::Error);
        for i in 0..count {
            if self.eof() {
                break;
            }
            if i > 0 {
                let token = self.current_token();
                self.report_lexical(token);
            }
            self.bump();
        }
        self.finish_node();
        if count > 1 {
            self.report_skipped(TextRange::new(start, self.last_end));
        }
    }

    /// Recovery artifacts are always recorded, even where a root cause was already reported.
    pub(super) fn report_skipped(&mut self, range: TextRange) {
        tracing::trace!(?range, "skipped input");
        self.diagnostics
            .report(DiagnosticKind::SkippedInput, range)
            .emit();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    pub(super) fn recursion_limit(&self) -> Option<u32> {
        self.recursion_limit
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.delimiter_stack.push(OpenDelimiter { kind, span });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Whether `close` matches a delimiter opened outside the innermost one.
    pub(super) fn closes_enclosing(&self, close: SyntaxKind) -> bool {
        let Some((_, outer)) = self.delimiter_stack.split_last() else {
            return false;
        };
        outer.iter().any(|d| closing_for(d.kind) == Some(close))
    }

    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        open: OpenDelimiter,
    ) {
        let current = self.current_token();
        if !self.should_report(current.span.start()) {
            return;
        }
        let detail = match current.kind {
            SyntaxKind::Eof => "reached end of input".to_string(),
            other => format!("found {}", other.describe()),
        };
        let opener = open.kind.name();
        // Full range for easier downstream error suppression
        let full_range = TextRange::new(open.span.start(), current.span.end());
        let mut builder = self
            .diagnostics
            .report(kind, full_range)
            .message(detail)
            .found(current.kind)
            .related_to(format!("`{opener}` started here"), open.span);
        if let Some(close) = closing_for(open.kind) {
            builder = builder
                .expected(TokenSet::single(close))
                .fix_at(
                    TextRange::empty(current.span.start()),
                    format!("insert `{}`", close.name()),
                    close.name(),
                );
        }
        builder.emit();
    }
}

pub(super) fn closing_for(open: SyntaxKind) -> Option<SyntaxKind> {
    match open {
        SyntaxKind::ParenOpen => Some(SyntaxKind::ParenClose),
        SyntaxKind::BraceOpen => Some(SyntaxKind::BraceClose),
        SyntaxKind::BracketOpen => Some(SyntaxKind::BracketClose),
        _ => None,
    }
}
