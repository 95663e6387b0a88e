//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use smithyql_syntax::parser::{DEFAULT_RECURSION_LIMIT, LexContext};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::tokens::TokensArgs;

pub struct CheckParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub trivia: bool,
    pub spans: bool,
    pub fields: bool,
    pub json: bool,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            fields: m.get_flag("fields"),
            json: m.get_flag("json"),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            trivia: p.trivia,
            spans: p.spans,
            fields: p.fields,
            json: p.json,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub context: LexContext,
    pub trivia: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        // clap restricts the value to known context names
        let context = m
            .get_one::<String>("context")
            .and_then(|name| name.parse().ok())
            .unwrap_or_default();
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            context,
            trivia: m.get_flag("trivia"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            context: p.context,
            trivia: p.trivia,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_recursion_limit(m: &ArgMatches) -> Option<u32> {
    if m.get_flag("unlimited_depth") {
        return None;
    }
    Some(
        m.get_one::<u32>("max_depth")
            .copied()
            .unwrap_or(DEFAULT_RECURSION_LIMIT),
    )
}
