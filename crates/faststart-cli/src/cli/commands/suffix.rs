//! `faststart suffix <raw>` – show how a suffix will be sanitized.

use anyhow::Result;
use faststart_core::suffix::sanitize_suffix;

pub fn run_suffix(raw: &str) -> Result<()> {
    println!("{}", sanitize_suffix(raw));
    Ok(())
}
