//! Command-line interface for linefilter
//! Keeps the non-zero integer fields of one line of a comma-separated file.
//!
//! Usage:
//!   linefilter `<source>` `<destination>` `<line>`
//!
//! `<line>` is zero-based. Nothing is printed on success; failures print a
//! diagnostic to stderr and exit non-zero.

mod logging;

use clap::{value_parser, Arg, Command};
use linefilter::FilterJob;
use std::path::PathBuf;
use tracing::debug;

fn cli() -> Command {
    Command::new("linefilter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keep the non-zero integer fields of one line of a comma-separated file")
        .arg_required_else_help(true)
        .arg(
            Arg::new("source")
                .help("Path to the source text file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("destination")
                .help("Path to the output file (created or overwritten)")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(2),
        )
        .arg(
            Arg::new("line")
                .help("Zero-based index of the line to filter")
                .required(true)
                .value_parser(value_parser!(usize))
                .index(3),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = logging::init() {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    }

    let source = matches.get_one::<PathBuf>("source").expect("source is required");
    let destination = matches
        .get_one::<PathBuf>("destination")
        .expect("destination is required");
    let line = *matches.get_one::<usize>("line").expect("line is required");

    handle_filter_command(FilterJob::new(source, destination, line));
}

/// Handle the filter command
fn handle_filter_command(job: FilterJob) {
    match job.run() {
        Ok(report) => {
            debug!(
                kept = report.kept,
                dropped = report.dropped,
                bytes = report.bytes_written,
                "done"
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
