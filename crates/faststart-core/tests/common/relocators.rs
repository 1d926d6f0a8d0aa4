//! In-process stand-ins for the external moov-relocation tool.

use faststart_core::relocate::{MoovRelocator, RelocateError};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Copies the input and records every call.
#[derive(Default)]
pub struct CopyRelocator {
    pub calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl MoovRelocator for CopyRelocator {
    fn process(&self, input: &Path, output: &Path) -> Result<(), RelocateError> {
        self.calls
            .borrow_mut()
            .push((input.to_path_buf(), output.to_path_buf()));
        fs::copy(input, output).map_err(|source| RelocateError::Io {
            operation: "copy",
            path: output.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

/// Reports the file as already fast-start after leaving an empty output behind.
pub struct AlreadyOptimized;

impl MoovRelocator for AlreadyOptimized {
    fn process(&self, _input: &Path, output: &Path) -> Result<(), RelocateError> {
        fs::write(output, b"").expect("write partial output");
        Err(RelocateError::Setup("file is already fast start".into()))
    }
}
