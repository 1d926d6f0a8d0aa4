//! Error type for moov relocation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a fast-start companion could not be produced. Every variant is a
/// recoverable skip for the render job; none is retried.
#[derive(Debug, Error)]
pub enum RelocateError {
    /// File already fast-start or otherwise not eligible.
    #[error("not eligible for fast start: {0}")]
    Setup(String),
    /// Input container could not be read.
    #[error("malformed input file: {0}")]
    MalformedFile(String),
    /// Container variant the relocator does not handle.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("input file not found: {}", .0.display())]
    InputMissing(PathBuf),
    #[error("input path is a directory: {}", .0.display())]
    InputIsDirectory(PathBuf),
    /// Relocator reported success but left no usable output.
    #[error("output missing or empty after relocation: {}", .0.display())]
    EmptyOutput(PathBuf),
    #[error("{operation} failed for {}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Any other failure of the external tool.
    #[error("relocation tool failed ({status}): {stderr}")]
    Tool { status: String, stderr: String },
}

impl RelocateError {
    /// True for the "already optimized / not eligible" case, which is
    /// expected and only worth an informational log line.
    pub fn is_skip(&self) -> bool {
        matches!(self, RelocateError::Setup(_))
    }
}
