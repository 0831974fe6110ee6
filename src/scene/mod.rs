//! Scene descriptors as plain data plus the renderers that turn them into canvases.
//!
//! A [`SceneSet`] holds the synthetic mockups and the framed captures. The
//! built-in set lives in [`catalog`]; a RON file of the same shape replaces it.

pub mod catalog;
pub mod frame;
pub mod mockup;

use std::{collections::HashSet, fs, path::Path};

use anyhow::{bail, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    font::Weight,
    layout::{BUTTON_WIDTH, FOCUS_WORD_SIZE},
    palette::{self, Color},
};

pub use frame::{compose_frame, load_capture, render_frame};
pub use mockup::render_mockup;

fn default_text_color() -> Color {
    palette::TEXT
}
fn default_background() -> Color {
    palette::BACKGROUND
}
fn default_focus_size() -> f32 {
    FOCUS_WORD_SIZE
}
fn default_button_width() -> u32 {
    BUTTON_WIDTH
}
fn default_preset_spacing() -> i32 {
    200
}

/// One drawable item of a mockup, painted in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    /// Single centred line; `y` is the top of the line box.
    Text {
        text: String,
        y: i32,
        size: f32,
        #[serde(default = "default_text_color")]
        color: Color,
        #[serde(default)]
        weight: Weight,
    },
    /// Word with the character at `focus` (0-based, in chars) in the accent colour.
    FocusWord {
        word: String,
        focus: usize,
        y: i32,
        #[serde(default = "default_focus_size")]
        size: f32,
    },
    Button {
        label: String,
        center_y: i32,
        #[serde(default = "default_button_width")]
        width: u32,
    },
    Slider {
        y: i32,
        label: String,
        fraction: f32,
    },
    Progress {
        y: i32,
        fraction: f32,
        #[serde(default)]
        label: Option<String>,
    },
    TextBox {
        y: i32,
        width: u32,
        height: u32,
        lines: Vec<String>,
        size: f32,
        line_height: i32,
    },
    Presets {
        y: i32,
        title: String,
        rows: Vec<(String, String)>,
        #[serde(default = "default_preset_spacing")]
        spacing: i32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockupScene {
    /// Shown in progress output.
    pub name: String,
    /// Output file name inside the mockup directory.
    pub file: String,
    #[serde(default = "default_background")]
    pub background: Color,
    pub elements: Vec<Element>,
}

/// One framed marketing shot built from a raw capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameScene {
    /// Capture file name inside the input directory.
    pub file: String,
    pub headline: String,
    pub subline: String,
    pub bg_top: Color,
    pub bg_bottom: Color,
    /// Accepted for older scene files; not drawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSet {
    pub mockups: Vec<MockupScene>,
    pub frames: Vec<FrameScene>,
}

impl SceneSet {
    pub fn builtin() -> Self {
        Self { mockups: catalog::mockups(), frames: catalog::frames() }
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).with_context(|| format!("read scene file {}", path.display()))?;
        // optional fields may be written bare (`label: "42%"`) or as `Some(..)`
        let set: SceneSet = ron::Options::default()
            .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
            .from_str(&data)
            .with_context(|| format!("parse scene file {}", path.display()))?;
        set.check().with_context(|| format!("invalid scenes in {}", path.display()))?;
        Ok(set)
    }

    pub fn to_ron(&self) -> Result<String> {
        let pretty = ron::ser::PrettyConfig::new().struct_names(false);
        ron::ser::to_string_pretty(self, pretty).context("serialise scene set")
    }

    /// Hard errors for data no renderer can draw. Out-of-range fractions are
    /// only logged; the widgets clamp them.
    pub fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for scene in &self.mockups {
            check_file_name(&scene.file)?;
            if !has_png_extension(&scene.file) {
                bail!("mockup output file {} must end in .png", scene.file);
            }
            if !seen.insert(scene.file.as_str()) {
                bail!("duplicate mockup output file {}", scene.file);
            }
            for element in &scene.elements {
                match element {
                    Element::FocusWord { word, focus, .. } => {
                        let len = word.chars().count();
                        if *focus >= len {
                            bail!("{}: focus index {focus} outside \"{word}\" ({len} chars)", scene.file);
                        }
                    }
                    Element::Slider { fraction, .. } | Element::Progress { fraction, .. } => {
                        if !(0.0..=1.0).contains(fraction) {
                            warn!(target: "scene", "{}: fraction {fraction} outside 0..=1, clamped", scene.file);
                        }
                    }
                    Element::Text { size, .. } | Element::TextBox { size, .. } if *size <= 0.0 => {
                        bail!("{}: text size must be > 0", scene.file);
                    }
                    _ => {}
                }
            }
        }
        for scene in &self.frames {
            check_file_name(&scene.file)?;
        }
        Ok(())
    }
}

fn check_file_name(file: &str) -> Result<()> {
    if file.trim().is_empty() {
        bail!("scene file name is empty");
    }
    if Path::new(file).is_absolute() || file.contains("..") {
        bail!("scene file {file} must be a plain relative name");
    }
    Ok(())
}

fn has_png_extension(file: &str) -> bool {
    Path::new(file).extension().is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}
