//! Contextual lexer for SmithyQL.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//! The parser asks for one token at a time, naming a [`LexContext`]; the lexer keeps no
//! state between calls.
//!
//! ## Keywords
//!
//! Logos recognizes every keyword spelling everywhere. The context then decides whether the
//! spelling is a keyword or demotes it to `Identifier`, so `{ true = 1 }` has a field named
//! `true` and `com.use#Thing` is a valid path.
//!
//! ## Error handling
//!
//! Consecutive unrecognized characters coalesce into a single `Garbage` token rather
//! than one error per character.

use logos::Logos;
use rowan::{TextRange, TextSize};
use std::ops::Range;

use super::cst::SyntaxKind;

/// Which terminals are legal at the current position, as far as keywords are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LexContext {
    /// Statement starts and the input after an operation name: `use`, `let`.
    #[default]
    Statement,
    /// Right after `use`: `service`.
    UseClause,
    /// Qualified identifiers and operation names: no keywords.
    Path,
    /// Struct field keys and binding keys: no keywords.
    Key,
    /// Literal positions: `true`, `false`, `null`.
    Value,
}

impl LexContext {
    pub const ALL: [LexContext; 5] = [
        LexContext::Statement,
        LexContext::UseClause,
        LexContext::Path,
        LexContext::Key,
        LexContext::Value,
    ];

    pub fn admits_keyword(self, kind: SyntaxKind) -> bool {
        use SyntaxKind::*;
        match self {
            LexContext::Statement => matches!(kind, KwUse | KwLet),
            LexContext::UseClause => kind == KwService,
            LexContext::Path | LexContext::Key => false,
            LexContext::Value => matches!(kind, KwTrue | KwFalse | KwNull),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LexContext::Statement => "statement",
            LexContext::UseClause => "use_clause",
            LexContext::Path => "path",
            LexContext::Key => "key",
            LexContext::Value => "value",
        }
    }
}

impl std::str::FromStr for LexContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LexContext::ALL
            .into_iter()
            .find(|ctx| ctx.name() == s)
            .ok_or_else(|| format!("unknown lexing context `{s}`"))
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Lexes the single longest token starting at `offset`.
///
/// At the end of the buffer this is a zero-width `Eof` token.
pub fn lex_token(source: &str, offset: TextSize, context: LexContext) -> Token {
    let start = usize::from(offset);
    if start >= source.len() {
        return Token::new(SyntaxKind::Eof, TextRange::empty(offset));
    }

    let rest = &source[start..];
    let mut lexer = SyntaxKind::lexer(rest);
    let mut error_end: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(end) = error_end {
                    return garbage(source, start, start + end);
                }
                let kind = if kind.is_keyword() && !context.admits_keyword(kind) {
                    SyntaxKind::Identifier
                } else {
                    kind
                };
                let span = lexer.span();
                return Token::new(kind, range_to_text_range(start + span.start..start + span.end));
            }
            Some(Err(())) => {
                error_end = Some(lexer.span().end);
            }
            None => {
                let end = error_end.unwrap_or(rest.len());
                return garbage(source, start, start + end);
            }
        }
    }
}

fn garbage(source: &str, start: usize, mut end: usize) -> Token {
    while end < source.len() && !source.is_char_boundary(end) {
        end += 1;
    }
    Token::new(SyntaxKind::Garbage, range_to_text_range(start..end))
}

/// Tokenizes the whole source under one context. The trailing `Eof` is not included.
pub fn lex(source: &str, context: LexContext) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut offset = TextSize::from(0);
    loop {
        let token = lex_token(source, offset, context);
        if token.kind == SyntaxKind::Eof {
            break;
        }
        offset = token.span.end();
        tokens.push(token);
    }
    tokens
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
