//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("l20n")
        .about("Inspect and validate L20n resources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(check_command())
}

/// Show the syntax tree of a resource.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a resource")
        .override_usage(
            "\
  l20n ast <FILE>
  l20n ast -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  l20n ast app.l20n                  # tree dump
  l20n ast app.l20n --spans          # with byte ranges
  l20n ast app.l20n --json           # machine-readable tree
  l20n ast -t '<hello "Hello">'      # inline resource
  cat app.l20n | l20n ast -          # stdin"#,
        )
        .arg(resource_path_arg())
        .arg(resource_text_arg())
        .arg(spans_arg())
        .arg(trivia_arg())
        .arg(json_arg())
        .arg(max_depth_arg())
        .arg(color_arg())
}

/// Validate resources.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate resources")
        .override_usage("  l20n check <FILE>...")
        .after_help(
            r#"EXAMPLES:
  l20n check app.l20n                # validate one file
  l20n check locales/*.l20n          # validate many
  l20n check - < app.l20n            # stdin"#,
        )
        .arg(resource_paths_arg())
        .arg(max_depth_arg())
        .arg(color_arg())
}
