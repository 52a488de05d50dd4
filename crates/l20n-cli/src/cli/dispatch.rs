//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;

pub struct AstParams {
    pub resource_path: Option<PathBuf>,
    pub resource_text: Option<String>,
    pub spans: bool,
    pub trivia: bool,
    pub json: bool,
    pub max_depth: Option<u32>,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            resource_path: m.get_one::<PathBuf>("resource_path").cloned(),
            resource_text: m.get_one::<String>("resource_text").cloned(),
            spans: m.get_flag("spans"),
            trivia: m.get_flag("trivia"),
            json: m.get_flag("json"),
            max_depth: m.get_one::<u32>("max_depth").copied(),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            resource_path: p.resource_path,
            resource_text: p.resource_text,
            spans: p.spans,
            trivia: p.trivia,
            json: p.json,
            recursion_limit: recursion_limit(p.max_depth),
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub resource_paths: Vec<PathBuf>,
    pub max_depth: Option<u32>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            resource_paths: m
                .get_many::<PathBuf>("resource_paths")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
            max_depth: m.get_one::<u32>("max_depth").copied(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            resource_paths: p.resource_paths,
            recursion_limit: recursion_limit(p.max_depth),
            color: p.color.should_colorize(),
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

/// `--max-depth` unset keeps the parser default, `0` removes the limit.
fn recursion_limit(max_depth: Option<u32>) -> Option<u32> {
    match max_depth {
        None => Some(l20n_syntax::parser::DEFAULT_RECURSION_LIMIT),
        Some(0) => None,
        Some(n) => Some(n),
    }
}
