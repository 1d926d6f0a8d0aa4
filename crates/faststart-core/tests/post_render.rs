//! Integration tests: full render job against a temp output directory.
//!
//! Each test writes the file the host would have produced, runs the job
//! phases, and checks which companion (if any) appears next to it.

mod common;

use common::relocators::{AlreadyOptimized, CopyRelocator};
use faststart_core::container::Container;
use faststart_core::job::{JobError, RenderJob};
use faststart_core::naming::FrameRange;
use faststart_core::pipeline::PostRenderOutcome;
use faststart_core::settings::{RenderSettings, SkipReason};
use faststart_core::suffix::{sanitize_suffix, Suffix};
use std::fs;
use tempfile::tempdir;

fn settings(filepath: &str, start: u32, end: u32) -> RenderSettings {
    RenderSettings::new(filepath, Container::Mpeg4, FrameRange::new(start, end).unwrap())
}

#[test]
fn placeholder_template_gets_companion() {
    let dir = tempdir().unwrap();
    let setting = dir.path().join("te##st.mov###");
    let rendered = dir.path().join("te##st.mov001-013.mp4");
    common::write_render(&rendered);

    let s = settings(setting.to_str().unwrap(), 1, 13);
    let mut job = RenderJob::new();
    job.on_render_init(&s).unwrap();
    job.check_pre_render().unwrap();

    let relocator = CopyRelocator::default();
    match job.post_render(&s, &Suffix::default(), &relocator) {
        PostRenderOutcome::Relocated { source, companion } => {
            assert_eq!(source, rendered);
            assert_eq!(companion, dir.path().join("te##st.mov001-013-faststart.mp4"));
        }
        other => panic!("expected Relocated, got {other:?}"),
    }
    assert_eq!(
        common::file_names(dir.path()),
        vec!["te##st.mov001-013-faststart.mp4", "te##st.mov001-013.mp4"]
    );
    assert_eq!(relocator.calls.borrow().len(), 1);
}

#[test]
fn missing_render_is_a_quiet_skip() {
    let dir = tempdir().unwrap();
    let s = settings(dir.path().join("TEST.TXT").to_str().unwrap(), 1, 5);
    let mut job = RenderJob::new();
    job.on_render_init(&s).unwrap();

    let relocator = CopyRelocator::default();
    match job.post_render(&s, &Suffix::default(), &relocator) {
        PostRenderOutcome::NotFound { predicted } => {
            assert_eq!(predicted, dir.path().join("TEST.TXT0001-0005.mp4"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(relocator.calls.borrow().is_empty());
    assert!(common::file_names(dir.path()).is_empty());
}

#[test]
fn directory_target_falls_back_to_project_name() {
    let dir = tempdir().unwrap();
    let rendered = dir.path().join("scene0001-0005.mp4");
    common::write_render(&rendered);

    let mut s = settings(dir.path().to_str().unwrap(), 1, 5);
    s.target_is_dir = true;
    s.project_name = Some("scene".into());

    let job = RenderJob::new();
    let relocator = CopyRelocator::default();
    match job.post_render(&s, &sanitize_suffix("_web"), &relocator) {
        PostRenderOutcome::Relocated { source, companion } => {
            assert_eq!(source, rendered);
            assert_eq!(companion, dir.path().join("scene0001-0005_web.mp4"));
        }
        other => panic!("expected Relocated, got {other:?}"),
    }
}

#[test]
fn literal_extension_render() {
    let dir = tempdir().unwrap();
    let rendered = dir.path().join("1-13.MP4");
    common::write_render(&rendered);

    let mut s = settings(dir.path().join("#.MP4").to_str().unwrap(), 1, 13);
    s.enforce_extension = false;

    let job = RenderJob::new();
    let relocator = CopyRelocator::default();
    match job.post_render(&s, &Suffix::default(), &relocator) {
        PostRenderOutcome::Relocated { companion, .. } => {
            assert_eq!(companion, dir.path().join("1-13-faststart.MP4"));
        }
        other => panic!("expected Relocated, got {other:?}"),
    }
}

#[test]
fn relocation_failure_keeps_original_and_cleans_up() {
    let dir = tempdir().unwrap();
    let rendered = dir.path().join("TEST.mp4");
    common::write_render(&rendered);
    let before = fs::read(&rendered).unwrap();

    let s = settings(dir.path().join("TEST.MP4").to_str().unwrap(), 1, 5);
    let job = RenderJob::new();
    match job.post_render(&s, &Suffix::default(), &AlreadyOptimized) {
        PostRenderOutcome::Failed {
            source,
            companion,
            error,
        } => {
            assert_eq!(source, rendered);
            assert!(error.is_skip());
            assert!(!companion.exists());
        }
        other => panic!("expected Failed, got {other:?}"),
    }
    assert_eq!(fs::read(&rendered).unwrap(), before);
    assert_eq!(common::file_names(dir.path()), vec!["TEST.mp4"]);
}

#[test]
fn empty_output_path_cancels_whole_job() {
    let s = settings("   ", 1, 5);
    let mut job = RenderJob::new();
    assert_eq!(job.on_render_init(&s), Err(JobError::EmptyOutputPath));
    assert_eq!(job.check_pre_render(), Err(JobError::PreviouslyRejected));

    let relocator = CopyRelocator::default();
    assert!(matches!(
        job.post_render(&s, &Suffix::default(), &relocator),
        PostRenderOutcome::Skipped(SkipReason::JobRejected)
    ));
    assert!(relocator.calls.borrow().is_empty());
}

#[test]
fn multiview_render_is_left_alone() {
    let dir = tempdir().unwrap();
    let rendered = dir.path().join("TEST.mp4");
    common::write_render(&rendered);

    let mut s = settings(dir.path().join("TEST.mp4").to_str().unwrap(), 1, 5);
    s.multiview = true;

    let mut job = RenderJob::new();
    job.on_render_init(&s).unwrap();
    let relocator = CopyRelocator::default();
    assert!(matches!(
        job.post_render(&s, &Suffix::default(), &relocator),
        PostRenderOutcome::Skipped(SkipReason::Multiview)
    ));
    assert_eq!(common::file_names(dir.path()), vec!["TEST.mp4"]);
}
