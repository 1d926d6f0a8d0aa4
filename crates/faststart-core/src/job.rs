//! Per-job lifecycle state: init check, pre-render gate, post-render step.
//!
//! A `RenderJob` lives for one render. Init resets it; once rejected every
//! later phase short-circuits without side effects.

use thiserror::Error;

use crate::pipeline::{self, PostRenderOutcome};
use crate::relocate::MoovRelocator;
use crate::settings::{RenderSettings, SkipReason};
use crate::suffix::Suffix;

/// Job-aborting errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JobError {
    /// Nothing could be located after rendering, so the job must not start.
    #[error(
        "output path setting is empty; a directory or file path is required, render job cancelled"
    )]
    EmptyOutputPath,
    #[error("render job previously cancelled (e.g. due to empty output path)")]
    PreviouslyRejected,
}

#[derive(Debug, Default)]
pub struct RenderJob {
    rejected: bool,
}

impl RenderJob {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_rejected(&self) -> bool {
        self.rejected
    }

    /// Called when a render job starts. Clears any previous rejection, then
    /// rejects the job if it is eligible but has no output path.
    pub fn on_render_init(&mut self, settings: &RenderSettings) -> Result<(), JobError> {
        self.rejected = false;
        if let Some(reason) = settings.skip_reason() {
            tracing::debug!(?reason, "render init: fast start not applicable");
            return Ok(());
        }
        if !settings.has_output_path() {
            self.rejected = true;
            tracing::error!("{}", JobError::EmptyOutputPath);
            return Err(JobError::EmptyOutputPath);
        }
        tracing::debug!("render init: checks passed");
        Ok(())
    }

    /// Called before each frame; refuses to continue a rejected job.
    pub fn check_pre_render(&self) -> Result<(), JobError> {
        if self.rejected {
            return Err(JobError::PreviouslyRejected);
        }
        Ok(())
    }

    /// Called once the host has finished writing the video.
    pub fn post_render(
        &self,
        settings: &RenderSettings,
        suffix: &Suffix,
        relocator: &dyn MoovRelocator,
    ) -> PostRenderOutcome {
        if self.rejected {
            tracing::info!("post render: skipping, job was rejected");
            return PostRenderOutcome::Skipped(SkipReason::JobRejected);
        }
        if let Some(reason) = settings.skip_reason() {
            tracing::info!(?reason, "post render: skipping fast start");
            return PostRenderOutcome::Skipped(reason);
        }
        let Some(container) = settings.container_config() else {
            return PostRenderOutcome::Skipped(SkipReason::UnsupportedOutput);
        };
        pipeline::process_rendered_output(settings, &container, suffix, relocator)
    }
}
