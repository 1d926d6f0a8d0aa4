//! Locating the file the host actually wrote.
//!
//! The predicted path is checked first. When the output setting was a bare
//! directory, a couple of alternative names the host is known to use are
//! tried next, in order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::naming::{FrameRange, DEFAULT_FRAME_WIDTH};

/// Which candidate produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Predicted,
    /// `<frames><ext>` in the output directory.
    FrameTokenOnly,
    /// `<project name><frames><ext>` in the output directory.
    ProjectName,
}

/// Confirmed path of the host-produced artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedFile {
    pub path: PathBuf,
    pub candidate: CandidateKind,
}

/// Directory and settings context for fallback candidates.
#[derive(Debug, Clone)]
pub struct LocateContext<'a> {
    pub output_dir: &'a Path,
    pub target_is_dir: bool,
    pub frames: FrameRange,
    /// Extension the host appends (may be empty).
    pub extension: &'a str,
    /// Project/session default base name, if the project has one.
    pub project_name: Option<&'a str>,
}

impl LocateContext<'_> {
    /// Fallback candidates in the order they are tried. Empty unless the
    /// target was a directory.
    pub fn fallback_candidates(&self) -> Vec<(CandidateKind, PathBuf)> {
        if !self.target_is_dir {
            return Vec::new();
        }
        let token = self.frames.token(DEFAULT_FRAME_WIDTH);
        let mut out = vec![(
            CandidateKind::FrameTokenOnly,
            self.output_dir.join(format!("{}{}", token, self.extension)),
        )];
        if let Some(name) = self.project_name.filter(|n| !n.is_empty()) {
            out.push((
                CandidateKind::ProjectName,
                self.output_dir.join(format!("{}{}{}", name, token, self.extension)),
            ));
        }
        out
    }
}

/// True when `path` exists and is not a directory.
pub fn is_existing_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| !m.is_dir()).unwrap_or(false)
}

/// Confirms `predicted`, or falls back to the context's candidates.
///
/// Returns `None` when nothing matches; callers treat that as a skip.
pub fn locate(predicted: &Path, ctx: &LocateContext<'_>) -> Option<LocatedFile> {
    if is_existing_file(predicted) {
        tracing::debug!(path = %predicted.display(), "found rendered file at predicted path");
        return Some(LocatedFile {
            path: predicted.to_path_buf(),
            candidate: CandidateKind::Predicted,
        });
    }
    tracing::warn!(
        path = %predicted.display(),
        "predicted output does not exist or is a directory"
    );

    for (kind, candidate) in ctx.fallback_candidates() {
        if candidate == predicted {
            continue;
        }
        if is_existing_file(&candidate) {
            tracing::info!(path = %candidate.display(), ?kind, "found rendered file with fallback");
            return Some(LocatedFile {
                path: candidate,
                candidate: kind,
            });
        }
        tracing::debug!(path = %candidate.display(), ?kind, "fallback candidate missing");
    }
    None
}
