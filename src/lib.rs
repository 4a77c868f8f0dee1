//! timebin - time-bucketed file type reports for directory trees

pub mod aggregate;
pub mod config;
pub mod detect;
pub mod error;
pub mod report;
pub mod walker;

pub use aggregate::{AggregateTree, Bucket, aggregate};
pub use config::{Config, Output};
pub use error::ScanError;
pub use report::{Report, emit, render};
pub use walker::{FileEntry, scan};
