use std::path::PathBuf;

use smithyql_syntax::Parser;
use smithyql_syntax::parser::CstPrinter;

use super::source_loader::load_or_exit;

pub struct DumpArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub trivia: bool,
    pub spans: bool,
    pub fields: bool,
    pub json: bool,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let source = load_or_exit(args.input_path.as_deref(), args.input_text.as_deref());

    let parse = Parser::new(&source.text)
        .with_recursion_limit(args.recursion_limit)
        .parse();
    let root = parse.syntax();
    let printer = CstPrinter::new(&root)
        .with_trivia(args.trivia)
        .with_spans(args.spans)
        .with_fields(args.fields);

    if args.json {
        match serde_json::to_string_pretty(&printer.json()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize tree: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", printer.render());
    }

    let diagnostics = parse.diagnostics();
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
}
