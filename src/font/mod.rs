//! Font discovery & glyph rasterisation.
//!
//! Preferred faces are looked up from a list of candidate paths (first one that
//! reads and parses wins). When none load, the built-in bitmap face is used so a
//! run never fails for lack of fonts. Outline faces go through `ab_glyph`;
//! `ttf-parser` is only used to count faces in collections and read family names
//! for log output.

mod bitmap;

use std::{
    fs,
    path::{Path, PathBuf},
};

use ab_glyph::{point, Font, FontVec, Glyph, PxScale, ScaleFont};
use anyhow::{anyhow, Context, Result};
use image::{Rgba, RgbaImage};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub use bitmap::BitmapFont;

use crate::{config::FontConfig, paint::blend_pixel};

/// Horizontal + vertical metrics of a single laid-out line (pixels, origin at the pen start).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    /// Sum of advances (plus kerning) of every drawable glyph.
    pub advance: f32,
    /// Leftmost inked pixel column relative to the pen origin.
    pub ink_left: i32,
    /// One past the rightmost inked column.
    pub ink_right: i32,
    pub ascent: f32,
    /// Negative below the baseline.
    pub descent: f32,
}

impl TextExtent {
    pub fn ink_width(&self) -> u32 {
        (self.ink_right - self.ink_left).max(0) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Weight {
    #[default]
    Regular,
    Bold,
    /// Headline face of the framed marketing shots.
    Display,
}

pub struct OutlineFace {
    font: FontVec,
    pub family: String,
    pub path: PathBuf,
}

pub enum Typeface {
    Outline(OutlineFace),
    Builtin(BitmapFont),
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Typeface {
    /// Load face 0 of a TrueType/OpenType file or collection.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read(path).with_context(|| format!("read font {}", path.display()))?;
        let faces = ttf_parser::fonts_in_collection(&data).unwrap_or(1);
        let family = family_name(&data, 0).unwrap_or_else(|| {
            path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
        });
        let font = FontVec::try_from_vec_and_index(data, 0)
            .map_err(|e| anyhow!("decode font {}: {e}", path.display()))?;
        debug!(target: "font", "{} holds {faces} face(s); using face 0", path.display());
        Ok(Typeface::Outline(OutlineFace { font, family, path: path.to_path_buf() }))
    }

    /// First candidate that loads, else the built-in bitmap face.
    pub fn discover<P: AsRef<Path>>(candidates: &[P]) -> Self {
        for candidate in candidates {
            let path = candidate.as_ref();
            if !path.exists() {
                debug!(target: "font", "candidate {} not present", path.display());
                continue;
            }
            match Self::from_file(path) {
                Ok(face) => {
                    info!(target: "font", "using {}", face.describe());
                    return face;
                }
                Err(e) => warn!(target: "font", "skipping {}: {e:#}", path.display()),
            }
        }
        warn!(
            target: "font",
            "none of {} font candidate(s) loaded; falling back to built-in bitmap font",
            candidates.len()
        );
        Typeface::Builtin(BitmapFont)
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin(_))
    }

    pub fn describe(&self) -> String {
        match self {
            Typeface::Outline(face) => format!("{} ({})", face.family, face.path.display()),
            Typeface::Builtin(_) => "built-in 5x7 bitmap".into(),
        }
    }

    pub fn ascent(&self, size: f32) -> f32 {
        match self {
            Typeface::Outline(face) => face.font.as_scaled(face.em_scale(size)).ascent(),
            Typeface::Builtin(_) => BitmapFont::ascent(size),
        }
    }

    pub fn measure(&self, text: &str, size: f32) -> TextExtent {
        match self {
            Typeface::Outline(face) => face.measure(text, size),
            Typeface::Builtin(_) => BitmapFont::measure(text, size),
        }
    }

    /// Draw `text` with its pen origin at `x` and the top of its line box at `top`.
    pub fn draw(&self, canvas: &mut RgbaImage, x: i32, top: i32, text: &str, size: f32, color: Rgba<u8>) {
        match self {
            Typeface::Outline(face) => face.draw(canvas, x, top, text, size, color),
            Typeface::Builtin(_) => BitmapFont::draw(canvas, x, top, text, size, color),
        }
    }
}

impl OutlineFace {
    /// `size` is the em size in pixels; ab_glyph scales by line height.
    fn em_scale(&self, size: f32) -> PxScale {
        let upem = self.font.units_per_em().unwrap_or(1000.0);
        PxScale::from(size * self.font.height_unscaled() / upem)
    }

    /// Glyphs positioned on a baseline at `ascent` below y=0. Unmapped chars are dropped.
    fn layout(&self, text: &str, size: f32) -> (Vec<Glyph>, f32) {
        let scaled = self.font.as_scaled(self.em_scale(size));
        let mut caret = 0.0f32;
        let mut prev = None;
        let mut glyphs = Vec::new();
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if id.0 == 0 {
                continue;
            }
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            glyphs.push(id.with_scale_and_position(scaled.scale(), point(caret, scaled.ascent())));
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
        (glyphs, caret)
    }

    fn measure(&self, text: &str, size: f32) -> TextExtent {
        let scaled = self.font.as_scaled(self.em_scale(size));
        let (glyphs, advance) = self.layout(text, size);
        let mut ink: Option<(f32, f32)> = None;
        for g in glyphs {
            if let Some(outlined) = self.font.outline_glyph(g) {
                let b = outlined.px_bounds();
                ink = Some(match ink {
                    Some((l, r)) => (l.min(b.min.x), r.max(b.max.x)),
                    None => (b.min.x, b.max.x),
                });
            }
        }
        let (ink_left, ink_right) = ink.map(|(l, r)| (l.floor() as i32, r.ceil() as i32)).unwrap_or((0, 0));
        TextExtent { advance, ink_left, ink_right, ascent: scaled.ascent(), descent: scaled.descent() }
    }

    fn draw(&self, canvas: &mut RgbaImage, x: i32, top: i32, text: &str, size: f32, color: Rgba<u8>) {
        let (glyphs, _) = self.layout(text, size);
        for mut g in glyphs {
            g.position = point(g.position.x + x as f32, g.position.y + top as f32);
            if let Some(outlined) = self.font.outline_glyph(g) {
                let b = outlined.px_bounds();
                let (ox, oy) = (b.min.x as i32, b.min.y as i32);
                outlined.draw(|gx, gy, c| blend_pixel(canvas, ox + gx as i32, oy + gy as i32, color, c));
            }
        }
    }
}

fn family_name(data: &[u8], index: u32) -> Option<String> {
    let face = ttf_parser::Face::parse(data, index).ok()?;
    face.names()
        .into_iter()
        .filter(|n| n.name_id == ttf_parser::name_id::FAMILY)
        .find_map(|n| n.to_string())
}

/// The three faces the scenes draw with.
#[derive(Debug)]
pub struct FontBook {
    pub regular: Typeface,
    pub bold: Typeface,
    pub display: Typeface,
}

impl FontBook {
    pub fn load(cfg: &FontConfig) -> Self {
        Self {
            regular: Typeface::discover(cfg.regular.as_slice()),
            bold: Typeface::discover(cfg.bold.as_slice()),
            display: Typeface::discover(cfg.display.as_slice()),
        }
    }

    /// Deterministic book (bitmap face for every weight); used by tests and `--builtin-font`.
    pub fn builtin() -> Self {
        Self {
            regular: Typeface::Builtin(BitmapFont),
            bold: Typeface::Builtin(BitmapFont),
            display: Typeface::Builtin(BitmapFont),
        }
    }

    pub fn face(&self, weight: Weight) -> &Typeface {
        match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
            Weight::Display => &self.display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_candidates_fall_back_to_builtin() {
        let face = Typeface::discover(&["/definitely/not/here.ttf", "also/missing.otf"]);
        assert!(face.is_builtin());
        let m = face.measure("BlitzRead", 64.0);
        assert!(m.ink_width() > 0);
    }

    #[test]
    fn unreadable_font_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let junk = dir.path().join("junk.ttf");
        fs::write(&junk, b"not a font at all").unwrap();
        assert!(Typeface::from_file(&junk).is_err());
        assert!(Typeface::discover(&[junk]).is_builtin());
    }

    #[test]
    fn book_dispatches_weights() {
        let book = FontBook::builtin();
        for w in [Weight::Regular, Weight::Bold, Weight::Display] {
            assert!(book.face(w).is_builtin());
        }
        assert_eq!(book.face(Weight::Bold).describe(), "built-in 5x7 bitmap");
    }
}
