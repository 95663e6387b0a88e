//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg()).arg(input_text_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("smithyql")
        .about("Parse SmithyQL documents and inspect their syntax trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(tokens_command())
}

/// Report diagnostics; silent on success.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report syntax errors and warnings")
        .override_usage(
            "\
  smithyql check <FILE>
  smithyql check -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  smithyql check query.smithyql
  cat query.smithyql | smithyql check -
  smithyql check -q 'GetForecast { city = "Paris" }'"#,
        );

    with_input_args(cmd)
        .arg(max_depth_arg())
        .arg(unlimited_depth_arg())
        .arg(color_arg())
}

/// Print the concrete syntax tree.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the concrete syntax tree")
        .override_usage(
            "\
  smithyql dump <FILE> [--trivia] [--spans] [--fields] [--json]
  smithyql dump -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  smithyql dump query.smithyql            # significant tokens only
  smithyql dump query.smithyql --trivia   # whitespace and comments too
  smithyql dump -q 'Op(1)' --json         # JSON view with field names"#,
        );

    with_input_args(cmd)
        .arg(trivia_arg())
        .arg(spans_arg())
        .arg(fields_arg())
        .arg(json_arg())
        .arg(max_depth_arg())
        .arg(unlimited_depth_arg())
        .arg(color_arg())
}

/// Print the token stream under one lexing context.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the token stream")
        .override_usage(
            "\
  smithyql tokens <FILE> [--context <CTX>] [--trivia]
  smithyql tokens -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  smithyql tokens -q 'use a#B'                   # `use` is a keyword
  smithyql tokens -q 'use a#B' --context path    # `use` is an identifier"#,
        );

    with_input_args(cmd).arg(context_arg()).arg(trivia_arg())
}
