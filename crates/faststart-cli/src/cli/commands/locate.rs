//! `faststart locate` – find the file the renderer wrote.

use anyhow::{bail, Context, Result};
use faststart_core::pipeline;
use faststart_core::settings::RenderSettings;

pub fn run_locate(settings: &RenderSettings) -> Result<()> {
    let container = settings
        .container_config()
        .context("output is not an MP4/MOV video")?;
    let prediction = pipeline::predict_output_path(settings, &container);
    match pipeline::locate_rendered_file(settings, &prediction) {
        Some(found) => {
            println!("{}", found.path.display());
            Ok(())
        }
        None => bail!(
            "rendered file not found (setting '{}', predicted {})",
            settings.filepath,
            prediction.path.display()
        ),
    }
}
