//! Content-based file type detection.
//!
//! Classification is signature-first: a file's bytes are matched against
//! known magic numbers, and only when nothing matches does the file name
//! contribute an extension guess. The detected type string is the top-level
//! media family of the matched MIME type (`image`, `video`, `audio`, ...).

/// Type string used for buffers no signature matches.
pub const UNKNOWN_KIND: &str = "unknown";

/// Result of sniffing a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detected {
    /// Top-level media family of the matched MIME type.
    pub kind: String,
    /// Canonical extension for the matched signature.
    pub extension: String,
}

/// Match a buffer against known file signatures.
///
/// Returns `None` when no signature matches; callers treat that as the
/// [`UNKNOWN_KIND`] type and derive an extension with
/// [`fallback_extension`].
pub fn sniff(buf: &[u8]) -> Option<Detected> {
    let kind = infer::get(buf)?;
    let family = kind.mime_type().split('/').next().unwrap_or(UNKNOWN_KIND);
    Some(Detected {
        kind: family.to_string(),
        extension: kind.extension().to_string(),
    })
}

/// Derive an extension from a file name when sniffing found nothing.
///
/// Takes the segment after the last `.`, lower-cased. A name without any
/// dot yields the whole name (`README` -> `readme`); downstream report
/// consumers rely on that pass-through.
pub fn fallback_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}
