//! Render arguments shared by the predict/locate/process commands.

use anyhow::Result;
use clap::Args;
use faststart_core::container::Container;
use faststart_core::naming::FrameRange;
use faststart_core::settings::RenderSettings;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Output path setting: a directory, a filename, or a template with `#` runs.
    #[arg(long, allow_hyphen_values = true)]
    pub filepath: String,

    /// Video container: mp4 or mov.
    #[arg(long, default_value = "mp4")]
    pub container: Container,

    /// Keep the typed extension instead of appending the container's.
    #[arg(long)]
    pub no_file_extension: bool,

    /// First frame of the render.
    #[arg(long, default_value_t = 1)]
    pub start: u32,

    /// Last frame of the render.
    #[arg(long, default_value_t = 250)]
    pub end: u32,

    /// Saved project file; its stem names renders into a bare directory.
    #[arg(long, value_name = "PATH")]
    pub project_file: Option<PathBuf>,

    /// Fast start is turned off for this project.
    #[arg(long)]
    pub disabled: bool,

    /// Stereoscopy/multiview is on.
    #[arg(long)]
    pub multiview: bool,

    /// Autosplit output is on.
    #[arg(long)]
    pub autosplit: bool,
}

impl RenderArgs {
    /// Resolves the arguments (and the filesystem, for directory targets)
    /// into engine settings.
    pub fn to_settings(&self) -> Result<RenderSettings> {
        let frames = FrameRange::new(self.start, self.end)?;
        let target_is_dir = !self.filepath.trim().is_empty() && Path::new(&self.filepath).is_dir();
        let project_name = self
            .project_file
            .as_deref()
            .and_then(Path::file_stem)
            .map(|s| s.to_string_lossy().into_owned());

        Ok(RenderSettings {
            filepath: self.filepath.clone(),
            container: Some(self.container),
            enforce_extension: !self.no_file_extension,
            frames,
            target_is_dir,
            project_name,
            faststart_enabled: !self.disabled,
            multiview: self.multiview,
            autosplit: Some(self.autosplit),
        })
    }
}
