use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{KEY_FIRST, STATEMENT_FIRST};
use crate::parser::cst::{TokenSet, token_sets};
use crate::parser::lexer::LexContext;

/// Where skipped top-level input may resume.
const STATEMENT_RECOVERY: TokenSet =
    STATEMENT_FIRST.union(TokenSet::new(&[SyntaxKind::BraceOpen, SyntaxKind::BracketOpen]));

impl Parser<'_> {
    /// `use_clause? top_level_statement*`
    pub(crate) fn parse_source_file(&mut self) {
        self.start_root(SyntaxKind::SourceFile);

        self.lex_as(LexContext::Statement);
        if self.currently_is(SyntaxKind::KwUse) {
            self.parse_use_clause();
        }

        loop {
            self.lex_as(LexContext::Statement);
            match self.current() {
                SyntaxKind::Eof => break,
                SyntaxKind::KwLet | SyntaxKind::Identifier => self.parse_top_level_statement(),
                SyntaxKind::KwUse => self.parse_misplaced_use_clause(),
                SyntaxKind::BraceOpen | SyntaxKind::BracketOpen => self.parse_orphan_input(),
                _ => self.error_until_statement_start(),
            }
        }

        self.assert_delimiters_balanced();
        self.drain_trivia();
        self.finish_node();
    }

    /// Skips to the next token that can start a statement, reporting the first one skipped.
    fn error_until_statement_start(&mut self) {
        let token = self.current_token();
        if !self.report_lexical(token) {
            self.error_expected(DiagnosticKind::ExpectedStatement, STATEMENT_FIRST);
        }

        let start = token.span.start();
        let mut count = 0;
        self.start_node(SyntaxKind::Error);
        loop {
            if count > 0 {
                if self.eof() || self.currently_is_one_of(STATEMENT_RECOVERY) {
                    break;
                }
                let token = self.current_token();
                self.report_lexical(token);
            }
            self.bump();
            count += 1;
        }
        self.finish_node();

        if count > 1 {
            let end = self.last_consumed_end();
            self.report_skipped(TextRange::new(start, end));
        }
    }

    /// `use 'service'? qualified_identifier`
    pub(crate) fn parse_use_clause(&mut self) {
        self.assert_current(SyntaxKind::KwUse);
        self.start_node(SyntaxKind::UseClause);
        self.bump();

        self.lex_as(LexContext::UseClause);
        if self.currently_is(SyntaxKind::KwService)
            && self.peek_nth(1, LexContext::Path) == SyntaxKind::Identifier
        {
            let service = self.current_span();
            self.bump();
            self.lex_as(LexContext::Path);
            let next = self.current_span();
            self.error_with_fix(
                DiagnosticKind::LegacyServiceKeyword,
                service,
                TextRange::new(service.start(), next.start()),
                "remove `service`",
                "",
            );
        }

        self.lex_as(LexContext::Path);
        self.parse_qualified_identifier();
        self.finish_node();
    }

    /// A `use` clause after the first statement: parsed, then disowned.
    fn parse_misplaced_use_clause(&mut self) {
        let range = self.current_span();
        self.start_node(SyntaxKind::Error);
        self.error_at(DiagnosticKind::MisplacedUseClause, range);
        self.parse_use_clause();
        self.finish_node();
    }

    /// A literal with no operation name in front of it. The missing name is only
    /// reported when the literal itself parsed cleanly.
    fn parse_orphan_input(&mut self) {
        let range = self.current_span();
        let errors_before = self.diagnostics.error_count();
        self.start_node(SyntaxKind::Error);
        self.lex_as(LexContext::Value);
        self.parse_input_node();
        self.finish_node();

        if self.diagnostics.error_count() == errors_before {
            self.error_at(DiagnosticKind::MissingOperationName, range);
        }
    }

    fn parse_top_level_statement(&mut self) {
        self.start_node(SyntaxKind::TopLevelStatement);
        if self.currently_is(SyntaxKind::KwLet) {
            self.parse_let_binding();
        } else {
            self.parse_operation_call();
        }
        self.finish_node();
    }

    /// `let binding (',' binding)* operation_call`
    fn parse_let_binding(&mut self) {
        self.assert_current(SyntaxKind::KwLet);
        self.start_node(SyntaxKind::LetBinding);
        self.bump();

        self.lex_as(LexContext::Key);
        if self.currently_is(SyntaxKind::Identifier) {
            self.parse_binding();
        } else {
            self.error_expected(DiagnosticKind::ExpectedIdentifier, KEY_FIRST);
        }

        loop {
            self.lex_as(LexContext::Key);
            match self.current() {
                SyntaxKind::Comma => {
                    if self.binding_follows(1) {
                        self.bump();
                        self.parse_binding();
                    } else {
                        self.error_trailing_comma();
                    }
                }
                SyntaxKind::Identifier if self.binding_follows(0) => {
                    self.error_expected(
                        DiagnosticKind::MissingComma,
                        TokenSet::single(SyntaxKind::Comma),
                    );
                    self.parse_binding();
                }
                _ => break,
            }
        }

        self.lex_as(LexContext::Statement);
        if self.currently_is(SyntaxKind::Identifier) {
            self.parse_operation_call();
        } else {
            self.error_expected(
                DiagnosticKind::ExpectedOperationCall,
                TokenSet::single(SyntaxKind::Identifier),
            );
        }

        self.finish_node();
    }

    /// Whether `identifier '='` starts at the `n`-th token from here.
    fn binding_follows(&mut self, n: usize) -> bool {
        self.peek_nth(n, LexContext::Key) == SyntaxKind::Identifier
            && self.peek_nth(n + 1, LexContext::Key) == SyntaxKind::Equals
    }

    fn parse_binding(&mut self) {
        self.parse_key_value(SyntaxKind::Binding);
    }

    /// `operation_name ( '(' input_node? ')' | struct )?`
    pub(crate) fn parse_operation_call(&mut self) {
        self.start_node(SyntaxKind::OperationCall);
        self.parse_operation_name();

        self.lex_as(LexContext::Statement);
        match self.current() {
            SyntaxKind::ParenOpen => self.parse_parenthesized_input(),
            SyntaxKind::BraceOpen => {
                self.lex_as(LexContext::Value);
                self.parse_input_node();
            }
            _ => {}
        }

        self.finish_node();
    }

    /// `'(' input_node? ')'`; the parentheses belong to the operation call.
    fn parse_parenthesized_input(&mut self) {
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        self.lex_as(LexContext::Value);
        let has_input = self.currently_is_one_of(token_sets::VALUE_FIRST);
        if has_input {
            self.parse_input_node();
        }

        let expected = TokenSet::single(SyntaxKind::ParenClose);
        loop {
            self.lex_as(LexContext::Value);
            match self.current() {
                SyntaxKind::ParenClose => {
                    self.bump();
                    break;
                }
                SyntaxKind::Comma
                    if has_input
                        && self.peek_nth(1, LexContext::Value) == SyntaxKind::ParenClose =>
                {
                    self.error_trailing_comma();
                }
                SyntaxKind::Eof => {
                    self.close_unclosed(DiagnosticKind::UnclosedParens);
                    return;
                }
                _ => {
                    self.error_unexpected(expected);
                    self.recover_until(expected);
                }
            }
        }

        self.pop_delimiter();
    }
}
