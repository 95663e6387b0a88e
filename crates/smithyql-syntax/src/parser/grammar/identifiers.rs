use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::PATH_CONTINUATION;
use crate::parser::cst::{SyntaxKind, TokenSet};
use crate::parser::lexer::LexContext;

const IDENTIFIER: TokenSet = TokenSet::single(SyntaxKind::Identifier);

impl Parser<'_> {
    /// `identifier ('.' identifier)* '#' identifier`, as one flat node.
    pub(crate) fn parse_qualified_identifier(&mut self) {
        self.lex_as(LexContext::Path);
        self.start_node(SyntaxKind::QualifiedIdentifier);
        if self.eat_token(SyntaxKind::Identifier) {
            self.parse_path_rest();
        } else {
            self.error_expected(DiagnosticKind::ExpectedIdentifier, IDENTIFIER);
        }
        self.finish_node();
    }

    /// `qualified_identifier | identifier`. The first identifier is consumed before
    /// knowing which; a following `.` or `#` retroactively wraps it.
    pub(crate) fn parse_operation_name(&mut self) {
        self.lex_as(LexContext::Path);
        self.assert_current(SyntaxKind::Identifier);
        self.start_node(SyntaxKind::OperationName);

        let checkpoint = self.checkpoint();
        self.bump();
        if self.currently_is_one_of(PATH_CONTINUATION) {
            self.start_node_at(checkpoint, SyntaxKind::QualifiedIdentifier);
            self.parse_path_rest();
            self.finish_node();
        }

        self.finish_node();
    }

    /// Everything after the first segment: `('.' identifier)* '#' identifier`.
    fn parse_path_rest(&mut self) {
        while self.eat_token(SyntaxKind::Dot) {
            if !self.eat_token(SyntaxKind::Identifier) {
                self.error_expected(DiagnosticKind::ExpectedIdentifier, IDENTIFIER);
                return;
            }
        }

        if !self.eat_token(SyntaxKind::Hash) {
            self.error_expected(DiagnosticKind::ExpectedHash, PATH_CONTINUATION);
            return;
        }

        if !self.eat_token(SyntaxKind::Identifier) {
            self.error_expected(DiagnosticKind::ExpectedIdentifier, IDENTIFIER);
        }
    }
}
