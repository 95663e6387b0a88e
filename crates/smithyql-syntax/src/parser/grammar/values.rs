use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{CLOSING_DELIMITERS, KEY_FIRST, VALUE_FIRST};
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::lexer::LexContext;

/// Shape of a comma-separated, delimited literal.
struct Delimited {
    open: SyntaxKind,
    close: SyntaxKind,
    unclosed: DiagnosticKind,
    /// Context the items are lexed in.
    context: LexContext,
    item_first: TokenSet,
    item: Item,
}

#[derive(Clone, Copy)]
enum Item {
    Field,
    Value,
}

const STRUCT: Delimited = Delimited {
    open: SyntaxKind::BraceOpen,
    close: SyntaxKind::BraceClose,
    unclosed: DiagnosticKind::UnclosedStruct,
    context: LexContext::Key,
    item_first: KEY_FIRST,
    item: Item::Field,
};

const LIST: Delimited = Delimited {
    open: SyntaxKind::BracketOpen,
    close: SyntaxKind::BracketClose,
    unclosed: DiagnosticKind::UnclosedList,
    context: LexContext::Value,
    item_first: VALUE_FIRST,
    item: Item::Value,
};

impl Parser<'_> {
    /// `struct | list | boolean | number | string | null | identifier`
    ///
    /// Caller guarantees the current token (in value context) is in `VALUE_FIRST`.
    pub(crate) fn parse_input_node(&mut self) {
        self.lex_as(LexContext::Value);
        let kind = self.current();
        debug_assert!(VALUE_FIRST.contains(kind), "parse_input_node at {kind:?}");

        let nested = matches!(kind, SyntaxKind::BraceOpen | SyntaxKind::BracketOpen);
        if nested && !self.enter_recursion() {
            self.skip_too_deep();
            return;
        }

        self.start_node(SyntaxKind::InputNode);
        match kind {
            SyntaxKind::BraceOpen => self.parse_delimited(SyntaxKind::Struct, &STRUCT),
            SyntaxKind::BracketOpen => self.parse_delimited(SyntaxKind::List, &LIST),
            SyntaxKind::KwTrue | SyntaxKind::KwFalse => {
                self.start_node(SyntaxKind::Boolean);
                self.bump();
                self.finish_node();
            }
            _ => self.bump(),
        }
        self.finish_node();

        if nested {
            self.exit_recursion();
        }
    }

    /// Value after `=`. A missing value leaves an empty `Error` node in its place.
    fn parse_value_or_missing(&mut self) {
        self.lex_as(LexContext::Value);
        let token = self.current_token();
        if VALUE_FIRST.contains(token.kind) {
            self.parse_input_node();
            return;
        }
        if self.report_lexical(token) {
            self.bump_as_error();
            return;
        }
        self.error_expected(DiagnosticKind::ExpectedValue, VALUE_FIRST);
        self.start_node(SyntaxKind::Error);
        self.finish_node();
    }

    pub(crate) fn parse_field(&mut self) {
        self.parse_key_value(SyntaxKind::Field);
    }

    /// `identifier '=' input_node`, shared by struct fields and `let` bindings.
    pub(crate) fn parse_key_value(&mut self, kind: SyntaxKind) {
        self.lex_as(LexContext::Key);
        self.assert_current(SyntaxKind::Identifier);
        self.start_node(kind);
        self.bump();

        self.lex_as(LexContext::Value);
        if self.eat_token(SyntaxKind::Equals) {
            self.parse_value_or_missing();
        } else {
            self.error_expected(
                DiagnosticKind::ExpectedEquals,
                TokenSet::single(SyntaxKind::Equals),
            );
            // `a 1` still gets its value; `a b = 1` is more likely a missing comma.
            let current = self.current();
            if VALUE_FIRST.contains(current) && current != SyntaxKind::Identifier {
                self.parse_input_node();
            } else {
                self.start_node(SyntaxKind::Error);
                self.finish_node();
            }
        }

        self.finish_node();
    }

    /// `open (item (',' item)*)? close`, wrapped in a `node` node.
    fn parse_delimited(&mut self, node: SyntaxKind, shape: &Delimited) {
        self.assert_current(shape.open);
        self.start_node(node);
        self.push_delimiter(shape.open);
        self.bump();

        let separators = TokenSet::new(&[SyntaxKind::Comma, shape.close]);
        let recovery = shape.item_first.union(separators).union(CLOSING_DELIMITERS);
        let mut expecting_item = true;

        loop {
            self.lex_as(shape.context);
            let current = self.current();

            if current == shape.close {
                self.bump();
                self.pop_delimiter();
                break;
            }

            if current == SyntaxKind::Eof
                || (CLOSING_DELIMITERS.contains(current) && self.closes_enclosing(current))
            {
                self.close_unclosed(shape.unclosed);
                break;
            }

            if current == SyntaxKind::Comma {
                if expecting_item {
                    self.error_expected(
                        DiagnosticKind::UnexpectedToken,
                        shape.item_first.union(TokenSet::single(shape.close)),
                    );
                    self.bump_as_error();
                } else if self.peek_nth(1, shape.context) == shape.close {
                    self.error_trailing_comma();
                } else {
                    self.bump();
                    expecting_item = true;
                }
                continue;
            }

            if shape.item_first.contains(current) {
                if !expecting_item {
                    self.error_expected(DiagnosticKind::MissingComma, separators);
                }
                match shape.item {
                    Item::Field => self.parse_field(),
                    Item::Value => self.parse_input_node(),
                }
                expecting_item = false;
                continue;
            }

            self.error_unexpected(shape.item_first.union(separators));
            self.recover_until(recovery);
        }

        self.finish_node();
    }

    /// Reports the innermost delimiter as unclosed and forgets it.
    pub(crate) fn close_unclosed(&mut self, kind: DiagnosticKind) {
        if let Some(open) = self.pop_delimiter() {
            self.error_unclosed_delimiter(kind, open);
        }
    }

    /// Reports the current `,` as trailing and wraps it in an `Error` node.
    pub(crate) fn error_trailing_comma(&mut self) {
        let range = self.current_span();
        self.error_with_fix(
            DiagnosticKind::TrailingComma,
            range,
            range,
            "remove the comma",
            "",
        );
        self.bump_as_error();
    }

    /// Skips one balanced literal that is nested past the recursion limit.
    fn skip_too_deep(&mut self) {
        let start = self.current_span();
        let limit = self.recursion_limit().unwrap_or_default();
        tracing::debug!(?start, limit, "nesting limit reached");
        self.diagnostics
            .report(DiagnosticKind::NestingTooDeep, start)
            .message(limit.to_string())
            .emit();

        self.start_node(SyntaxKind::Error);
        let mut depth = 0usize;
        loop {
            self.lex_as(LexContext::Value);
            let current = self.current();
            if current == SyntaxKind::Eof {
                break;
            }
            if matches!(
                current,
                SyntaxKind::BraceOpen | SyntaxKind::BracketOpen | SyntaxKind::ParenOpen
            ) {
                depth += 1;
            } else if CLOSING_DELIMITERS.contains(current) {
                depth = depth.saturating_sub(1);
            }
            self.bump();
            if depth == 0 {
                break;
            }
        }
        self.finish_node();
    }
}
