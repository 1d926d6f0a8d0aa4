//! Shared fixtures for integration tests.

pub mod relocators;

use std::fs;
use std::path::Path;

/// Writes a fake rendered video.
pub fn write_render(path: &Path) {
    fs::write(path, b"ftyp....mdat....moov").expect("write render");
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
