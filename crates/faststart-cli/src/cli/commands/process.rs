//! `faststart process` – run one post-render job end to end.

use anyhow::Result;
use faststart_core::config::FaststartConfig;
use faststart_core::job::RenderJob;
use faststart_core::pipeline::PostRenderOutcome;
use faststart_core::settings::RenderSettings;
use faststart_core::suffix::sanitize_suffix;

/// An empty output path fails the command; everything after that is a
/// best-effort step reported on stdout.
pub fn run_process(
    settings: &RenderSettings,
    cfg: &FaststartConfig,
    suffix_override: Option<&str>,
) -> Result<()> {
    let suffix = match suffix_override {
        Some(raw) => sanitize_suffix(raw),
        None => cfg.sanitized_suffix(),
    };
    let relocator = cfg.command_relocator();

    let mut job = RenderJob::new();
    job.on_render_init(settings)?;
    job.check_pre_render()?;

    match job.post_render(settings, &suffix, &relocator) {
        PostRenderOutcome::Skipped(reason) => println!("Skipped: {:?}", reason),
        PostRenderOutcome::NotFound { predicted } => {
            println!(
                "Rendered file not found (predicted {}); nothing to do.",
                predicted.display()
            );
        }
        PostRenderOutcome::Relocated { source, companion } => {
            println!("Wrote {} (from {})", companion.display(), source.display());
        }
        PostRenderOutcome::Failed { source, error, .. } => {
            println!(
                "Fast start not applied to {}: {}. Original left untouched.",
                source.display(),
                error
            );
        }
    }
    Ok(())
}
