//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Resource file (positional), `-` for stdin.
pub fn resource_path_arg() -> Arg {
    Arg::new("resource_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Resource file (`-` reads stdin)")
}

/// One or more resource files (positional).
pub fn resource_paths_arg() -> Arg {
    Arg::new("resource_paths")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Resource files (`-` reads stdin)")
}

/// Inline resource text (-t/--text).
pub fn resource_text_arg() -> Arg {
    Arg::new("resource_text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .conflicts_with("resource_path")
        .help("Inline resource text")
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

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Include whitespace between entries (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include whitespace between entries")
}

/// Print the tree as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .conflicts_with_all(["spans", "trivia"])
        .help("Print the tree as JSON")
}

/// Maximum nesting depth (--max-depth).
pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting of values and expressions (0 = unlimited)")
}
