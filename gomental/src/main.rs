//! # gomental
//!
//! A CLI tool reporting structural metrics of Go source trees, per directory.
//!
//! ## Overview
//!
//! gomental is built on top of gomentallib. It walks a directory tree, parses
//! every Go file, and prints one row per directory group with package, file,
//! line and declaration counts.
//!
//! ## Usage
//!
//! ```bash
//! # One row per top-level directory
//! gomental .
//!
//! # Group two levels deep, hide directories without Go files
//! gomental . --depth 2 --no-zero
//!
//! # Include _test.go files and skip generated code
//! gomental . --tests --skip gen,mocks
//!
//! # Machine-readable output
//! gomental . --output json
//! gomental . --output tsv
//! ```

mod render;

use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::style;
use gomentallib::{aggregate, AnalyzeOptions, FactSet, TracingSink};
use tracing_subscriber::EnvFilter;

use render::{render_facts, OutputFormat};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("gomental")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Count Go declarations, files and lines per directory")
        .subcommand_negates_reqs(true)
        .args_conflicts_with_subcommands(true)
        .arg(
            Arg::new("path")
                .help("Root of the Go source tree to analyze")
                .required(true),
        )
        .arg(
            Arg::new("depth")
                .short('d')
                .long("depth")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
                .default_value("1")
                .help("Display an entry for all directories \"depth\" directories deep"),
        )
        .arg(
            Arg::new("skip")
                .short('s')
                .long("skip")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .help("Skip directories with this name (can be specified multiple times)"),
        )
        .arg(
            Arg::new("tests")
                .short('t')
                .long("tests")
                .action(ArgAction::SetTrue)
                .help("Include _test.go files and testdata/ directories"),
        )
        .arg(
            Arg::new("no-zero")
                .long("no-zero")
                .action(ArgAction::SetTrue)
                .help("Hide directories without Go files"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "tsv", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log progress to stderr"),
        )
        .subcommand(Command::new("version").about("Display the version"))
}

/// Send diagnostics to stderr. RUST_LOG overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build analysis options from matches
fn build_options(matches: &ArgMatches) -> AnalyzeOptions {
    let depth = matches.get_one::<i64>("depth").copied().unwrap_or(1);
    let skip: Vec<String> = matches
        .get_many::<String>("skip")
        .map(|v| v.filter(|s| !s.is_empty()).cloned().collect())
        .unwrap_or_default();

    AnalyzeOptions::new()
        .depth(depth)
        .skip_many(skip)
        .include_tests(matches.get_flag("tests"))
        .hide_empty(matches.get_flag("no-zero"))
}

/// Run the analysis and render the report
fn count_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let format = matches
        .get_one::<String>("output")
        .map(|s| OutputFormat::from_name(s))
        .unwrap_or(OutputFormat::Table);
    let options = build_options(matches);
    tracing::debug!(path, depth = options.depth, skip = ?options.skip_names(), "analyzing");

    let facts = aggregate(path, &options, &mut TracingSink)?;
    let set = FactSet::from_map(facts, options.hide_empty);

    render_facts(&set, format)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    if matches.subcommand_matches("version").is_some() {
        println!("gomental version : {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    init_logging(matches.get_flag("verbose"));

    match count_handler(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold().for_stderr(), e);
            ExitCode::FAILURE
        }
    }
}
