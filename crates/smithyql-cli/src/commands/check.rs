use std::path::PathBuf;

use smithyql_syntax::Parser;

use super::source_loader::load_or_exit;

pub struct CheckArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = load_or_exit(args.input_path.as_deref(), args.input_text.as_deref());

    let parse = Parser::new(&source.text)
        .with_recursion_limit(args.recursion_limit)
        .parse();
    let diagnostics = parse.diagnostics();
    tracing::debug!(
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        "checked {}",
        source.name
    );

    if !diagnostics.is_empty() {
        eprintln!(
            "{}",
            diagnostics
                .printer()
                .source(&source.text)
                .path(&source.name)
                .colored(args.color)
                .render()
        );
    }

    if diagnostics.has_errors() {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
