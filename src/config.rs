//! Environment-sourced configuration.
//!
//! Two variables drive a run: `PATH_SCAN`, a `|`-separated list of
//! directories to scan, and `OUTPUT`, either the literal `print` or a file
//! path for the JSON report.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the scan roots.
pub const PATH_SCAN_VAR: &str = "PATH_SCAN";

/// Environment variable naming the output target.
pub const OUTPUT_VAR: &str = "OUTPUT";

/// Separator between directory paths in `PATH_SCAN`.
pub const PATH_SEPARATOR: char = '|';

/// Destination for the rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Write the document to standard output.
    Print,
    /// Create (or truncate) a file and write the document's bytes to it.
    File(PathBuf),
}

impl Output {
    /// `print` (case-insensitive) selects stdout; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("print") {
            Output::Print
        } else {
            Output::File(PathBuf::from(raw))
        }
    }
}

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scan roots in configured order, trimmed of surrounding spaces. The
    /// trimmed string is also the report key for that root.
    pub roots: Vec<String>,
    pub output: Output,
    /// True when `OUTPUT` was absent and `print` was assumed; the driver
    /// prints a hint in that case.
    pub output_defaulted: bool,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Returns `None` when `PATH_SCAN` is unset or empty; the caller prints
    /// guidance and exits successfully in that case.
    pub fn from_env() -> Option<Config> {
        Self::from_vars(
            env::var(PATH_SCAN_VAR).ok().as_deref(),
            env::var(OUTPUT_VAR).ok().as_deref(),
        )
    }

    fn from_vars(path_scan: Option<&str>, output: Option<&str>) -> Option<Config> {
        let raw_roots = path_scan.filter(|v| !v.is_empty())?;

        let roots = raw_roots
            .split(PATH_SEPARATOR)
            .map(|p| p.trim_matches(' ').to_string())
            .collect();

        let (output, output_defaulted) = match output.filter(|v| !v.is_empty()) {
            Some(raw) => (Output::parse(raw), false),
            None => (Output::Print, true),
        };

        Some(Config {
            roots,
            output,
            output_defaulted,
        })
    }
}
