//! Post-render pipeline: predict the host's output file, locate it, and
//! derive and produce its fast-start companion.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::container::ContainerConfig;
use crate::locate::{self, LocateContext, LocatedFile};
use crate::naming::{self, split_extension, NamingPlan};
use crate::relocate::{self, MoovRelocator, RelocateError};
use crate::settings::{RenderSettings, SkipReason};
use crate::suffix::Suffix;

/// Where the host writes, and the template it names the file from.
///
/// A directory target has an empty basename. Otherwise the setting splits at
/// its last path separator; a trailing separator also leaves the basename
/// empty.
pub fn resolve_target(filepath: &str, target_is_dir: bool) -> (PathBuf, &str) {
    if target_is_dir {
        return (PathBuf::from(filepath), "");
    }
    match filepath.rfind(std::path::is_separator) {
        Some(i) => (PathBuf::from(&filepath[..=i]), &filepath[i + 1..]),
        None => (PathBuf::new(), filepath),
    }
}

/// Predicted output of one render.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub rule: &'static str,
    pub plan: NamingPlan,
    pub output_dir: PathBuf,
    pub filename: String,
    pub path: PathBuf,
}

/// Predicts the full path the host writes the video to.
pub fn predict_output_path(settings: &RenderSettings, container: &ContainerConfig) -> Prediction {
    let (output_dir, basename) = resolve_target(&settings.filepath, settings.target_is_dir);
    let (rule, plan) = naming::plan(basename, container, settings.target_is_dir);
    let filename = plan.render(&settings.frames);
    let path = output_dir.join(&filename);
    tracing::debug!(
        setting = %settings.filepath,
        output_dir = %output_dir.display(),
        predicted = %path.display(),
        "predicted output path"
    );
    Prediction {
        rule: rule.name(),
        plan,
        output_dir,
        filename,
        path,
    }
}

/// Confirms the predicted file exists, trying fallbacks for directory targets.
pub fn locate_rendered_file(
    settings: &RenderSettings,
    prediction: &Prediction,
) -> Option<LocatedFile> {
    let ctx = LocateContext {
        output_dir: &prediction.output_dir,
        target_is_dir: settings.target_is_dir,
        frames: settings.frames,
        extension: &prediction.plan.extension,
        project_name: settings.project_name.as_deref(),
    };
    locate::locate(&prediction.path, &ctx)
}

/// `<stem><suffix><ext>` next to `source`.
pub fn companion_path(source: &Path, suffix: &Suffix) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (stem, ext) = split_extension(&name);
    source.with_file_name(format!("{}{}{}", stem, suffix, ext))
}

/// Result of the post-render step. Only `Relocated` produced a companion;
/// every other outcome left the filesystem as it was.
#[derive(Debug)]
pub enum PostRenderOutcome {
    Skipped(SkipReason),
    NotFound {
        predicted: PathBuf,
    },
    Relocated {
        source: PathBuf,
        companion: PathBuf,
    },
    Failed {
        source: PathBuf,
        companion: PathBuf,
        error: RelocateError,
    },
}

/// Locates the rendered file and writes its fast-start companion.
///
/// Never fails: a missing file or relocation error is logged and reported
/// as an outcome.
pub fn process_rendered_output(
    settings: &RenderSettings,
    container: &ContainerConfig,
    suffix: &Suffix,
    relocator: &dyn MoovRelocator,
) -> PostRenderOutcome {
    let prediction = predict_output_path(settings, container);

    let Some(located) = locate_rendered_file(settings, &prediction) else {
        tracing::error!(
            setting = %settings.filepath,
            predicted = %prediction.path.display(),
            "could not find the rendered file after fallbacks, skipping fast start"
        );
        return PostRenderOutcome::NotFound {
            predicted: prediction.path,
        };
    };

    let source = located.path;
    let companion = companion_path(&source, suffix);
    match relocate::run_relocation(relocator, &source, &companion) {
        Ok(()) => {
            tracing::info!(
                companion = %companion.display(),
                "created fast start version"
            );
            PostRenderOutcome::Relocated { source, companion }
        }
        Err(error) => {
            if error.is_skip() {
                tracing::info!(source = %source.display(), "fast start not needed: {}", error);
            } else {
                tracing::warn!(
                    source = %source.display(),
                    companion = %companion.display(),
                    "fast start failed, original left untouched: {}",
                    error
                );
            }
            PostRenderOutcome::Failed {
                source,
                companion,
                error,
            }
        }
    }
}
