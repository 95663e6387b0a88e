use std::fmt::Write;
use std::path::PathBuf;

use smithyql_syntax::parser::{LexContext, Token, lex, token_text};

use super::source_loader::load_or_exit;

pub struct TokensArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub context: LexContext,
    pub trivia: bool,
}

pub fn run(args: TokensArgs) {
    let source = load_or_exit(args.input_path.as_deref(), args.input_text.as_deref());

    let tokens = lex(&source.text, args.context);
    print!("{}", format_tokens(&source.text, &tokens, args.trivia));

    if tokens.iter().any(|t| t.kind.is_error()) {
        std::process::exit(1);
    }
}

/// One line per token: kind, byte range, text.
pub fn format_tokens(source: &str, tokens: &[Token], trivia: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        if !trivia && token.kind.is_trivia() {
            continue;
        }
        writeln!(
            out,
            "{:?} {}..{} {:?}",
            token.kind,
            u32::from(token.span.start()),
            u32::from(token.span.end()),
            token_text(source, token)
        )
        .expect("String write never fails");
    }
    out
}
