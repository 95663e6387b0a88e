//! Parser infrastructure for SmithyQL.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - On-demand lexing: the parser pulls one token at a time, naming the [`LexContext`]
//!   that decides which keyword spellings are keywords there
//! - Zero-copy tokens: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then flushed between significant tokens
//! - Checkpoint-based wrapping: an operation name becomes a qualified identifier retroactively
//!   once `.` or `#` shows up
//! - Explicit recovery sets: per-production sets determine where skipping stops
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Recovery follows these rules:
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing values leave an empty `Error` node where the value belongs
//! 3. Recovery sets define synchronization points, searched within a bounded window
//! 4. A closer that belongs to an enclosing literal ends the inner one, reported as unclosed
//! 5. Literals nested past the recursion limit are skipped as one balanced `Error` node

pub mod ast;
pub mod cst;
pub mod dump;
pub mod lexer;
pub mod meta;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{SmithyQl, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TokenSet};

pub use ast::{
    Binding, Boolean, Field, InputNode, LetBinding, List, OperationCall, OperationName,
    QualifiedIdentifier, SourceFile, Statement, Struct, TopLevelStatement, UseClause, Value,
};

pub use core::{DEFAULT_RECURSION_LIMIT, DEFAULT_RESYNC_WINDOW, Parser};
pub use dump::{CstJson, CstPrinter};
pub use lexer::{LexContext, Token, lex, lex_token, token_text};

use crate::diagnostics::Diagnostics;
use crate::{Error, Result};

/// Parse result: the green tree plus everything reported while building it.
///
/// The tree is always complete; diagnostics are returned separately.
/// Error nodes in the tree represent recovery points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    cst: rowan::GreenNode,
    diagnostics: Diagnostics,
}

impl Parse {
    pub(crate) fn new(cst: rowan::GreenNode, diagnostics: Diagnostics) -> Self {
        Self { cst, diagnostics }
    }

    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    /// Creates a red tree view over the immutable green tree.
    /// This is cheap: SyntaxNode is a thin wrapper with parent pointers.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    pub fn source_file(&self) -> SourceFile {
        SourceFile::cast(self.syntax()).expect("parser always produces SourceFile")
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// No error-severity diagnostics. Warnings are allowed.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Strict view: the tree only if it parsed without errors.
    pub fn into_result(self) -> Result<SourceFile> {
        if self.diagnostics.has_errors() {
            return Err(Error::Syntax(self.diagnostics));
        }
        Ok(self.source_file())
    }

    /// Indented tree of significant tokens.
    pub fn dump_cst(&self) -> String {
        CstPrinter::new(&self.syntax()).render()
    }

    /// Indented tree including whitespace and comments.
    pub fn dump_cst_full(&self) -> String {
        CstPrinter::new(&self.syntax()).with_trivia(true).render()
    }
}

/// Main entry point: parse with default limits.
pub fn parse(source: &str) -> Parse {
    Parser::new(source).parse()
}

/// Parse again after an edit.
///
/// `previous` is accepted for callers built around incremental reparsing, but the tree is
/// always rebuilt from scratch.
pub fn reparse(source: &str, previous: Option<&Parse>) -> Parse {
    if let Some(previous) = previous {
        tracing::debug!(
            previous_len = u32::from(previous.cst.text_len()),
            "ignoring previous tree, reparsing from scratch"
        );
    }
    parse(source)
}
