//! The two generation passes: synthetic mockups and framed captures. Each
//! renders its scenes in order, writes one PNG per scene and, when enabled, a
//! manifest beside them.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::{
    config::ShotConfig,
    font::FontBook,
    output::{save_png, write_manifest, Manifest, OutputRecord},
    scene::{render_frame, render_mockup, SceneSet},
};

/// Output name of the `n`th (1-based) framed shot.
pub fn frame_file_name(n: usize) -> String {
    format!("appstore_{n}.png")
}

pub fn generate_mockups(cfg: &ShotConfig, scenes: &SceneSet, fonts: &FontBook) -> Result<Vec<OutputRecord>> {
    let dir = &cfg.output.mockup_dir;
    info!(target: "output", "{} mockup(s) -> {}", scenes.mockups.len(), dir.display());
    let mut records = Vec::with_capacity(scenes.mockups.len());
    for (i, scene) in scenes.mockups.iter().enumerate() {
        let canvas = render_mockup(scene, &cfg.canvas, fonts).with_context(|| format!("render mockup {}", scene.file))?;
        records.push(save_png(&canvas, &dir.join(&scene.file), &scene.name)?);
        println!("✓ Created screenshot {}: {}", i + 1, scene.name);
    }
    finish(cfg, dir, &records)?;
    Ok(records)
}

pub fn frame_captures(cfg: &ShotConfig, scenes: &SceneSet, fonts: &FontBook) -> Result<Vec<OutputRecord>> {
    let dir = &cfg.output.marketing_dir;
    let total = scenes.frames.len();
    info!(target: "output", "{total} framed shot(s) from {} -> {}", cfg.input.raw_dir.display(), dir.display());
    let mut records = Vec::with_capacity(total);
    for (i, scene) in scenes.frames.iter().enumerate() {
        println!("Creating marketing screenshot {}/{total}: {}", i + 1, scene.headline);
        let canvas = render_frame(scene, &cfg.input.raw_dir, &cfg.canvas, &cfg.frame, fonts)
            .with_context(|| format!("frame {}", scene.file))?;
        let name = frame_file_name(i + 1);
        records.push(save_png(&canvas, &dir.join(&name), &scene.headline)?);
        println!("  → Saved {name} ({}x{})", canvas.width(), canvas.height());
    }
    finish(cfg, dir, &records)?;
    Ok(records)
}

fn finish(cfg: &ShotConfig, dir: &Path, records: &[OutputRecord]) -> Result<()> {
    if !cfg.output.manifest || records.is_empty() {
        return Ok(());
    }
    let manifest = Manifest::new(cfg.canvas.width, cfg.canvas.height, records.to_vec());
    let path = write_manifest(dir, &manifest)?;
    info!(target: "output", "manifest {}", path.display());
    Ok(())
}
