//! Scene template command

use anyhow::{Context, Result};
use ember_particles::SceneConfig;

pub fn run(path: &str) -> Result<()> {
    SceneConfig::template()
        .save_new(path)
        .with_context(|| format!("Failed to write scene template to '{path}'"))?;
    println!("Created scene: {path}");
    println!("  ember run {path}");
    Ok(())
}
