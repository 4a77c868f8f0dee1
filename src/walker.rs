//! Recursive directory traversal.
//!
//! Flattens a directory tree into a list of file entries, one per regular
//! file. Directories are recursion points, never entries themselves. Any
//! listing or read failure aborts the scan of the whole root with no
//! partial results; zero-byte files are the single tolerated anomaly
//! (skipped with a log line, never counted).

use std::fs::{self, Metadata};
use std::path::{self, Path, PathBuf};
use std::time::UNIX_EPOCH;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::detect::{self, UNKNOWN_KIND};
use crate::error::ScanError;

/// One regular file discovered during a scan.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    /// Absolute path of the containing directory.
    pub dir: PathBuf,
    /// Detected extension, or the name-derived fallback.
    pub extension: String,
    /// Detected media family, or `unknown`.
    pub kind: String,
    pub size: u64,
    /// Modification time as reported by the directory listing.
    pub modified: DateTime<Local>,
    /// Permission bits from the listing metadata.
    pub mode: u32,
    /// Always false: directories are recursed into, not recorded.
    pub is_dir: bool,
}

/// Scan a root directory, returning a flat entry list.
///
/// The root is resolved to an absolute path first. Entries of each
/// directory are processed in name order, and a subdirectory's descendants
/// appear contiguously at that subdirectory's position in the listing.
pub fn scan(root: &Path) -> Result<Vec<FileEntry>, ScanError> {
    let root = path::absolute(root).map_err(|source| ScanError::ResolvePath {
        path: root.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    scan_dir(&root, &mut entries)?;
    Ok(entries)
}

fn scan_dir(dir: &Path, out: &mut Vec<FileEntry>) -> Result<(), ScanError> {
    debug!(path = %dir.display(), "scanning directory");

    let reader = fs::read_dir(dir).map_err(|source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut listed = Vec::new();
    for entry in reader {
        let entry = entry.map_err(|source| ScanError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        // Listing metadata (no symlink traversal); size, timestamp and mode
        // for the entry all come from here, not from a later re-stat.
        let meta = entry.metadata().map_err(|source| ScanError::ReadDir {
            path: entry.path(),
            source,
        })?;
        listed.push((entry, meta));
    }
    listed.sort_by_key(|(entry, _)| entry.file_name());

    for (entry, meta) in listed {
        if meta.is_dir() {
            scan_dir(&entry.path(), out)?;
            continue;
        }

        let file_path = entry.path();
        let buf = fs::read(&file_path).map_err(|source| ScanError::ReadFile {
            path: file_path.clone(),
            source,
        })?;
        if buf.is_empty() {
            debug!(path = %file_path.display(), "skipping empty file");
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let (kind, extension) = match detect::sniff(&buf) {
            Some(detected) => (detected.kind, detected.extension),
            None => (UNKNOWN_KIND.to_string(), detect::fallback_extension(&name)),
        };

        out.push(FileEntry {
            name,
            dir: dir.to_path_buf(),
            extension,
            kind,
            size: meta.len(),
            modified: modified_time(&meta),
            mode: mode_bits(&meta),
            is_dir: false,
        });
    }

    Ok(())
}

fn modified_time(meta: &Metadata) -> DateTime<Local> {
    DateTime::from(meta.modified().unwrap_or(UNIX_EPOCH))
}

#[cfg(unix)]
fn mode_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(meta: &Metadata) -> u32 {
    if meta.permissions().readonly() { 0o444 } else { 0o666 }
}
