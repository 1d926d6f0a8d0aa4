//! `faststart predict` – print the predicted output path.

use anyhow::{Context, Result};
use faststart_core::pipeline;
use faststart_core::settings::RenderSettings;

pub fn run_predict(settings: &RenderSettings, json: bool) -> Result<()> {
    let container = settings
        .container_config()
        .context("output is not an MP4/MOV video")?;
    let prediction = pipeline::predict_output_path(settings, &container);
    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        println!("{}", prediction.path.display());
    }
    Ok(())
}
