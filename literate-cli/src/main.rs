//! Command-line interface for literate
//! Turns a pre-tokenized source page (comments and identifiers already marked up) into its
//! literate rendering, or inspects the intermediate results.
//!
//! Usage:
//!   literate convert `<path>` [-o `<out>`] [--config `<file>`] [--title `<title>`]
//!                    [--highlight `<id>`] [--framed]    - Write the literate page
//!   literate segments `<path>` [--config `<file>`]       - Print merged segments as JSON
//!   literate xref `<path>` [--config `<file>`]           - Print the identifier index as JSON
//!
//! `--verbose` raises logging to debug; `RUST_LOG` takes precedence over both.

mod commands;

use clap::{Arg, ArgAction, ArgMatches, Command};
use commands::{ConvertArgs, InputArgs};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn input_args() -> [Arg; 2] {
    [
        Arg::new("path")
            .help("Path to the annotated HTML page")
            .required(true)
            .index(1),
        Arg::new("config")
            .long("config")
            .short('c')
            .help("TOML file layered over the built-in defaults"),
    ]
}

fn cli() -> Command {
    Command::new("literate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders annotated source pages as literate documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Log pipeline details to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert")
                .about("Write the literate rendering of a page")
                .args(input_args())
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file (default: stdout)"),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Title used when the page has no <title>"),
                )
                .arg(
                    Arg::new("highlight")
                        .long("highlight")
                        .value_name("ID")
                        .help("Open the page at the deep link ?id=ID"),
                )
                .arg(
                    Arg::new("framed")
                        .long("framed")
                        .help("Render as if embedded in another page")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("segments")
                .about("Print the merged documentation/code segments as JSON")
                .args(input_args()),
        )
        .subcommand(
            Command::new("xref")
                .about("Print every identifier with its reference count as JSON")
                .args(input_args()),
        )
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn input(matches: &ArgMatches) -> InputArgs {
    InputArgs {
        path: PathBuf::from(
            matches
                .get_one::<String>("path")
                .expect("path is a required argument"),
        ),
        config: matches.get_one::<String>("config").map(PathBuf::from),
    }
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("convert", sub)) => commands::convert(&ConvertArgs {
            input: input(sub),
            output: sub.get_one::<String>("output").map(PathBuf::from),
            title: sub.get_one::<String>("title").cloned(),
            highlight: sub.get_one::<String>("highlight").cloned(),
            framed: sub.get_flag("framed"),
        }),
        Some(("segments", sub)) => commands::segments(&input(sub)).map(print_output),
        Some(("xref", sub)) => commands::xref(&input(sub)).map(print_output),
        _ => unreachable!("clap requires a subcommand"),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_output(text: String) {
    println!("{}", text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn verbose_is_accepted_after_the_subcommand() {
        let matches = cli()
            .try_get_matches_from(["literate", "xref", "page.html", "--verbose"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }
}
