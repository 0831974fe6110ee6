//! PNG export and the per-directory run manifest.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::paint::flatten;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// One written image.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OutputRecord {
    /// Scene label (mockup name or frame headline).
    pub scene: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Manifest {
    pub version: u32,
    pub canvas: CanvasSize,
    pub outputs: Vec<OutputRecord>,
}

impl Manifest {
    pub fn new(width: u32, height: u32, outputs: Vec<OutputRecord>) -> Self {
        Self { version: MANIFEST_VERSION, canvas: CanvasSize { width, height }, outputs }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path).with_context(|| format!("read manifest {}", path.display()))?;
        serde_json::from_str(&txt).with_context(|| format!("parse manifest {}", path.display()))
    }
}

/// Flatten to RGB and write as PNG, creating parent directories.
pub fn save_png(canvas: &RgbaImage, path: &Path, scene: &str) -> Result<OutputRecord> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create output dir {}", parent.display()))?;
    }
    flatten(canvas)
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write {}", path.display()))?;
    debug!(target: "output", "wrote {} ({}x{})", path.display(), canvas.width(), canvas.height());
    Ok(OutputRecord { scene: scene.to_string(), path: path.to_path_buf(), width: canvas.width(), height: canvas.height() })
}

/// Pretty JSON manifest at `<dir>/manifest.json`. Returns its path.
pub fn write_manifest(dir: &Path, manifest: &Manifest) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create output dir {}", dir.display()))?;
    let path = dir.join(MANIFEST_FILE);
    let js = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, js).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
