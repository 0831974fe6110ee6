use anyhow::{Context, Result};
use image::RgbaImage;
use log::debug;

use crate::{
    config::CanvasConfig,
    font::FontBook,
    paint::solid,
    text::{draw_centered, TextStyle},
    widgets,
};

use super::{Element, MockupScene};

/// Solid background, then every element in order.
pub fn render_mockup(scene: &MockupScene, canvas_cfg: &CanvasConfig, fonts: &FontBook) -> Result<RgbaImage> {
    let mut canvas = solid(canvas_cfg.width, canvas_cfg.height, scene.background);
    for (i, element) in scene.elements.iter().enumerate() {
        draw_element(&mut canvas, fonts, element).with_context(|| format!("{} element #{i}", scene.file))?;
    }
    debug!(target: "scene", "rendered {} ({} elements)", scene.file, scene.elements.len());
    Ok(canvas)
}

fn draw_element(canvas: &mut RgbaImage, fonts: &FontBook, element: &Element) -> Result<()> {
    match element {
        Element::Text { text, y, size, color, weight } => {
            draw_centered(canvas, *y, text, &TextStyle::new(fonts.face(*weight), *size, *color));
        }
        Element::FocusWord { word, focus, y, size } => widgets::focus_word(canvas, fonts, *y, word, *focus, *size)?,
        Element::Button { label, center_y, width } => {
            widgets::button(canvas, fonts, *center_y, label, *width);
        }
        Element::Slider { y, label, fraction } => {
            widgets::slider(canvas, fonts, *y, label, *fraction);
        }
        Element::Progress { y, fraction, label } => {
            widgets::progress_bar(canvas, fonts, *y, *fraction, label.as_deref());
        }
        Element::TextBox { y, width, height, lines, size, line_height } => {
            widgets::text_box(canvas, fonts, *y, *width, *height, lines, *size, *line_height);
        }
        Element::Presets { y, title, rows, spacing } => {
            widgets::presets(canvas, fonts, *y, title, rows, *spacing);
        }
    }
    Ok(())
}
