//! CLI entry point for timebin

use std::path::Path;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use timebin::{Config, Report, ScanError, aggregate, emit, render, scan};

#[derive(Parser, Debug)]
#[command(name = "timebin")]
#[command(about = "Reports file counts and sizes bucketed by timestamp and content type")]
#[command(version)]
struct Args {
    /// Optional command; `help` prints usage text and exits
    command: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(command) = &args.command {
        if command.eq_ignore_ascii_case("help") {
            print_usage();
            return;
        }
    }

    let Some(config) = Config::from_env() else {
        println!(
            "Please set the PATH_SCAN environment variable to the directories to scan, separated by '|'"
        );
        return;
    };

    if config.output_defaulted {
        println!(
            "Please set the OUTPUT environment variable to 'print' or a file path, e.g. './report.json'"
        );
        println!("OUTPUT set to 'print'");
    }

    if let Err(e) = run(&config) {
        eprintln!("timebin: {e}");
        process::exit(1);
    }
}

/// Scan every configured root in order, then render and emit the report.
///
/// The first scan failure aborts the whole run; no report is produced for
/// any root in that case.
fn run(config: &Config) -> Result<(), ScanError> {
    let mut report = Report::new();

    for root in &config.roots {
        let entries = scan(Path::new(root))?;
        report.insert(root.clone(), aggregate(&entries));
    }

    let document = render(&report)?;
    emit(&document, &config.output)
}

fn print_usage() {
    println!();
    println!("Scans directories and prints a JSON report of file counts and byte sizes,");
    println!("bucketed by modification time and detected content type.");
    println!();
    println!("Usage:");
    println!();
    println!("   PATH_SCAN=dir_1|dir_2|dir_N   directories to scan");
    println!("   OUTPUT=print                  print the report to standard output");
    println!("   OUTPUT=/dir/report.json       write the report to a file");
    println!();
    println!("Report shape:");
    println!();
    println!(
        "   {{\"path\":{{\"year\":{{\"month 1-12\":{{\"day\":{{\"hour\":{{\"minute\":{{\"type\":{{\"Size\":int,\"Files\":int}}}}}}}}}}}}}}}}"
    );
    println!();
}
