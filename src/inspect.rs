//! Summary statistics for written PNGs (luma histogram, colour count).

use std::{collections::HashSet, fmt, path::Path};

use anyhow::{Context, Result};
use image::RgbImage;

#[derive(Debug, Clone, PartialEq)]
pub struct ImageStats {
    pub width: u32,
    pub height: u32,
    pub distinct_colors: usize,
    pub mean_luma: f64,
    /// Share of pixels with luma 0, in percent.
    pub black_pct: f64,
    /// Share of pixels with luma 255, in percent.
    pub white_pct: f64,
}

impl ImageStats {
    /// Every pixel the same colour.
    pub fn is_uniform(&self) -> bool {
        self.distinct_colors <= 1
    }
}

impl fmt::Display for ImageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} colors={} mean={:.2} black%={:.2}% white%={:.2}%",
            self.width, self.height, self.distinct_colors, self.mean_luma, self.black_pct, self.white_pct
        )
    }
}

pub fn analyze(img: &RgbImage) -> ImageStats {
    let (width, height) = img.dimensions();
    let mut hist = [0u64; 256];
    let mut colors = HashSet::new();
    for p in img.pixels() {
        let [r, g, b] = p.0;
        colors.insert(p.0);
        // Rec. 601 integer weights
        let luma = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
        hist[luma as usize] += 1;
    }
    let total = hist.iter().sum::<u64>().max(1) as f64;
    let mean_luma = hist.iter().enumerate().map(|(i, c)| i as f64 * *c as f64).sum::<f64>() / total;
    ImageStats {
        width,
        height,
        distinct_colors: colors.len(),
        mean_luma,
        black_pct: hist[0] as f64 / total * 100.0,
        white_pct: hist[255] as f64 / total * 100.0,
    }
}

pub fn inspect_file(path: &Path) -> Result<ImageStats> {
    let img = image::open(path).with_context(|| format!("open {}", path.display()))?;
    Ok(analyze(&img.to_rgb8()))
}
