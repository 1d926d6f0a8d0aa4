//! Moov-atom relocation: producing the fast-start companion of a rendered file.
//!
//! The relocation itself is done by an external collaborator behind
//! [`MoovRelocator`]. [`run_relocation`] guards the call: it checks the input,
//! prepares the output directory, verifies the result and cleans up partial
//! output. The input file is never modified.

mod command;
mod error;

pub use command::{classify_failure, CommandRelocator};
pub use error::RelocateError;

use std::fs;
use std::path::Path;

/// Rewrites `input` into `output` with the moov atom moved to the front.
pub trait MoovRelocator {
    fn process(&self, input: &Path, output: &Path) -> Result<(), RelocateError>;
}

/// Runs `relocator` from `input` to `output` and checks the result.
///
/// On failure the output is removed if this run created it or left it empty.
/// A non-empty companion that was already there is kept.
pub fn run_relocation(
    relocator: &dyn MoovRelocator,
    input: &Path,
    output: &Path,
) -> Result<(), RelocateError> {
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        "starting moov relocation"
    );

    let meta =
        fs::metadata(input).map_err(|_| RelocateError::InputMissing(input.to_path_buf()))?;
    if meta.is_dir() {
        return Err(RelocateError::InputIsDirectory(input.to_path_buf()));
    }

    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| RelocateError::Io {
                operation: "create output directory",
                path: dir.to_path_buf(),
                source,
            })?;
            tracing::info!(dir = %dir.display(), "created output directory");
        }
    }

    let existed = output.exists();
    let result = relocator
        .process(input, output)
        .and_then(|()| verify_output(output));
    if result.is_err() {
        remove_partial_output(output, existed);
    }
    result
}

fn verify_output(output: &Path) -> Result<(), RelocateError> {
    match fs::metadata(output) {
        Ok(m) if m.is_file() && m.len() > 0 => Ok(()),
        _ => Err(RelocateError::EmptyOutput(output.to_path_buf())),
    }
}

fn remove_partial_output(output: &Path, existed: bool) {
    let Ok(meta) = fs::metadata(output) else {
        return;
    };
    if !meta.is_file() {
        return;
    }
    if existed && meta.len() > 0 {
        tracing::debug!(path = %output.display(), "keeping output from an earlier run");
        return;
    }
    match fs::remove_file(output) {
        Ok(()) => tracing::info!(path = %output.display(), "removed partial output"),
        Err(e) => {
            tracing::warn!(path = %output.display(), "could not remove partial output: {}", e)
        }
    }
}
