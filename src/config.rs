use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    layout::{CANVAS_HEIGHT, CANVAS_WIDTH},
    paint::ShadowStyle,
    palette::{self, Color},
};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}
impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination of the synthetic app-screen mockups.
    pub mockup_dir: PathBuf,
    /// Destination of the framed `appstore_N.png` shots.
    pub marketing_dir: PathBuf,
    /// Write `manifest.json` beside the PNGs.
    pub manifest: bool,
}
impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mockup_dir: PathBuf::from("screenshots/mockups"),
            marketing_dir: PathBuf::from("screenshots/marketing"),
            manifest: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Directory holding the raw simulator captures named by frame scenes.
    pub raw_dir: PathBuf,
}
impl Default for InputConfig {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from("screenshots/raw"),
        }
    }
}

/// Candidate font files per weight, tried in order.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    pub regular: Vec<PathBuf>,
    pub bold: Vec<PathBuf>,
    pub display: Vec<PathBuf>,
}
impl Default for FontConfig {
    fn default() -> Self {
        let paths = |list: &[&str]| list.iter().map(PathBuf::from).collect::<Vec<_>>();
        Self {
            regular: paths(&[
                "/System/Library/Fonts/SFNSText.ttf",
                "/System/Library/Fonts/SFNS.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            ]),
            bold: paths(&[
                "/System/Library/Fonts/SFNS.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
            ]),
            display: paths(&[
                "/System/Library/Fonts/SFPro-Bold.otf",
                "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
                "/System/Library/Fonts/Helvetica.ttc",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
            ]),
        }
    }
}

/// Geometry of the framed marketing shots.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FrameLayout {
    /// Capture width as a fraction of the canvas width.
    pub phone_width_ratio: f32,
    pub corner_radius: u32,
    /// Gap between the capture's bottom edge and the canvas bottom.
    pub bottom_margin: u32,
    pub shadow_offset: i32,
    pub shadow_radius: u32,
    pub shadow_alpha: u8,
    /// Gaussian sigma in pixels.
    pub shadow_blur: f32,
    pub headline_y: i32,
    pub headline_size: f32,
    pub headline_color: Color,
    /// Distance from the headline top to the subline top.
    pub subline_gap: i32,
    pub subline_size: f32,
    pub subline_color: Color,
}
impl Default for FrameLayout {
    fn default() -> Self {
        Self {
            phone_width_ratio: 0.82,
            corner_radius: 40,
            bottom_margin: 80,
            shadow_offset: 8,
            shadow_radius: 40,
            shadow_alpha: 80,
            shadow_blur: 15.0,
            headline_y: 180,
            headline_size: 96.0,
            headline_color: palette::TEXT,
            subline_gap: 120,
            subline_size: 42.0,
            subline_color: palette::SUBLINE,
        }
    }
}

impl FrameLayout {
    pub fn shadow(&self) -> ShadowStyle {
        ShadowStyle {
            offset: (self.shadow_offset, self.shadow_offset),
            radius: self.shadow_radius,
            alpha: self.shadow_alpha,
            blur_sigma: self.shadow_blur,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ShotConfig {
    pub canvas: CanvasConfig,
    pub output: OutputConfig,
    pub input: InputConfig,
    pub fonts: FontConfig,
    pub frame: FrameLayout,
}

impl ShotConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple config layers, later files overriding earlier ones (deep merge of maps).
    /// Unreadable files are skipped; returns (config, layer_paths_used, errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        match merged {
            Some(val) => match val.into_rust::<ShotConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                    (ShotConfig::default(), used, errors)
                }
            },
            None => (ShotConfig::default(), used, errors),
        }
    }

    /// Human-readable warnings for suspicious values. Not hard errors; log each with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.canvas.width == 0 || self.canvas.height == 0 {
            w.push("canvas dimensions must be > 0".into());
        } else if (self.canvas.width, self.canvas.height) != (CANVAS_WIDTH, CANVAS_HEIGHT) {
            w.push(format!(
                "canvas {}x{} differs from {}x{}; built-in scene coordinates are authored for the latter",
                self.canvas.width, self.canvas.height, CANVAS_WIDTH, CANVAS_HEIGHT
            ));
        }
        if self.output.mockup_dir == self.output.marketing_dir && self.output.manifest {
            w.push(format!(
                "output.mockup_dir and output.marketing_dir are both {}; the second manifest overwrites the first",
                self.output.mockup_dir.display()
            ));
        }
        for (label, list) in [
            ("fonts.regular", &self.fonts.regular),
            ("fonts.bold", &self.fonts.bold),
            ("fonts.display", &self.fonts.display),
        ] {
            if list.is_empty() {
                w.push(format!("{label} has no candidates; built-in bitmap font will be used"));
            }
        }
        let f = &self.frame;
        if !(f.phone_width_ratio > 0.0 && f.phone_width_ratio <= 1.0) {
            w.push(format!("frame.phone_width_ratio {} outside (0, 1]", f.phone_width_ratio));
        }
        if f.shadow_blur < 0.0 {
            w.push(format!("frame.shadow_blur {} negative -> treated as 0", f.shadow_blur));
        } else if f.shadow_blur > 100.0 {
            w.push(format!("frame.shadow_blur {} very large; blur cost grows with sigma", f.shadow_blur));
        }
        if f.shadow_alpha == 0 {
            w.push("frame.shadow_alpha is 0; shadow invisible".into());
        }
        if f.headline_size <= 0.0 || f.subline_size <= 0.0 {
            w.push("frame headline/subline sizes must be > 0".into());
        }
        if f.headline_y < 0 || f.headline_y as u32 >= self.canvas.height {
            w.push(format!("frame.headline_y {} outside canvas", f.headline_y));
        }
        if f.bottom_margin >= self.canvas.height {
            w.push(format!("frame.bottom_margin {} >= canvas height", f.bottom_margin));
        }
        w
    }
}
