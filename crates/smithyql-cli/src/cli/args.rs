//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use smithyql_syntax::parser::LexContext;

/// SmithyQL document, or `-` for stdin (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("input_text")
        .help("SmithyQL file, or - for stdin")
}

/// Inline document text (-q/--query).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .help("Inline SmithyQL text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Include whitespace and comments (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include whitespace and comments")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Label children with grammar field names (--fields).
pub fn fields_arg() -> Arg {
    Arg::new("fields")
        .long("fields")
        .action(ArgAction::SetTrue)
        .help("Label children with their grammar field names")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of an indented tree")
}

/// Literal nesting limit (--max-depth).
pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .conflicts_with("unlimited_depth")
        .help("Deepest literal nesting to descend into (default 128)")
}

/// Remove the nesting limit (--unlimited-depth).
pub fn unlimited_depth_arg() -> Arg {
    Arg::new("unlimited_depth")
        .long("unlimited-depth")
        .action(ArgAction::SetTrue)
        .help("Descend into arbitrarily deep literals")
}

/// Lexing context for the token stream (--context).
pub fn context_arg() -> Arg {
    Arg::new("context")
        .long("context")
        .value_name("CTX")
        .default_value(LexContext::default().name())
        .value_parser(LexContext::ALL.map(LexContext::name))
        .help("Lexing context deciding which keywords are recognized")
}
