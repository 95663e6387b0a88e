//! SmithyQL syntax: contextual lexer and error-tolerant parser producing a lossless CST.
//!
//! # Example
//!
//! ```
//! use smithyql_syntax::parse;
//!
//! let source = r#"
//!     use com.example#Weather
//!     GetForecast({ city = "Paris", days = 3 })
//! "#;
//!
//! let parse = parse(source);
//! assert!(parse.is_valid());
//! assert_eq!(parse.syntax().to_string(), source);
//! eprintln!("{}", parse.diagnostics().render(source));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parser;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use parser::{Parse, Parser, SyntaxKind, SyntaxNode, parse, reparse};

/// Errors for callers that want a strict result instead of a tree plus diagnostics.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("parsing failed with {} errors", .0.error_count())]
    Syntax(Diagnostics),
}

pub type Result<T> = std::result::Result<T, Error>;
