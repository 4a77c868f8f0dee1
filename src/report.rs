//! Report assembly and emission.
//!
//! A report maps each configured root path to the aggregation tree built
//! from its scan. The whole document is serialized once and written to the
//! configured destination.

use std::collections::BTreeMap;
use std::fs;

use crate::aggregate::AggregateTree;
use crate::config::Output;
use crate::error::ScanError;

/// Mapping from configured (trimmed) root path to its aggregation tree.
///
/// Map semantics: a root path configured twice keeps only the last scan.
pub type Report = BTreeMap<String, AggregateTree>;

/// Serialize the report as a compact JSON document.
pub fn render(report: &Report) -> Result<String, ScanError> {
    Ok(serde_json::to_string(report)?)
}

/// Write the rendered document to its destination.
///
/// File output creates or truncates the target; any create or write
/// failure is fatal.
pub fn emit(document: &str, output: &Output) -> Result<(), ScanError> {
    match output {
        Output::Print => {
            println!("{document}");
            Ok(())
        }
        Output::File(path) => {
            fs::write(path, document.as_bytes()).map_err(|source| ScanError::WriteOutput {
                path: path.clone(),
                source,
            })
        }
    }
}
