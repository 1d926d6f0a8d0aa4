//! Render settings handed over by the host integration.
//!
//! Optional host capabilities (autosplit) are resolved once when the settings
//! are built, never probed again inside the engine.

use crate::container::{Container, ContainerConfig};
use crate::naming::FrameRange;

/// Why post-processing does nothing for a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Fast start not enabled for this project.
    Disabled,
    /// Output is not an FFmpeg MP4/MOV render.
    UnsupportedOutput,
    /// Stereoscopy/multiview writes one file per view.
    Multiview,
    /// Autosplit writes several chunk files.
    Autosplit,
    /// The job was rejected during initialization.
    JobRejected,
}

/// Everything the engine needs to know about one render job.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Raw output path template as typed by the user.
    pub filepath: String,
    /// `None` when the output is not an MP4/MOV video.
    pub container: Option<Container>,
    /// Host appends the container's canonical extension.
    pub enforce_extension: bool,
    pub frames: FrameRange,
    /// `filepath` names an existing directory.
    pub target_is_dir: bool,
    /// Default base name of the project/session (e.g. saved project file stem).
    pub project_name: Option<String>,
    pub faststart_enabled: bool,
    pub multiview: bool,
    /// `None` when the host has no autosplit option.
    pub autosplit: Option<bool>,
}

impl RenderSettings {
    /// Settings for an eligible render with no optional features enabled.
    pub fn new(filepath: impl Into<String>, container: Container, frames: FrameRange) -> Self {
        Self {
            filepath: filepath.into(),
            container: Some(container),
            enforce_extension: true,
            frames,
            target_is_dir: false,
            project_name: None,
            faststart_enabled: true,
            multiview: false,
            autosplit: None,
        }
    }

    /// Eligibility gate; checks run in a fixed order and the first failing one wins.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        if !self.faststart_enabled {
            Some(SkipReason::Disabled)
        } else if self.container.is_none() {
            Some(SkipReason::UnsupportedOutput)
        } else if self.multiview {
            Some(SkipReason::Multiview)
        } else if self.autosplit == Some(true) {
            Some(SkipReason::Autosplit)
        } else {
            None
        }
    }

    pub fn container_config(&self) -> Option<ContainerConfig> {
        self.container
            .map(|c| ContainerConfig::new(c, self.enforce_extension))
    }

    pub fn has_output_path(&self) -> bool {
        !self.filepath.trim().is_empty()
    }
}
