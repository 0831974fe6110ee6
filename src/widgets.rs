//! UI chrome drawn into the mockup scenes. Every widget is centred on the canvas
//! horizontally and positioned vertically by the caller.

use anyhow::{bail, Result};
use image::RgbaImage;

use crate::{
    font::FontBook,
    layout::*,
    paint::{fill_rect, fill_rounded_rect, stroke_rounded_rect, Rect},
    palette::{ACCENT, BUTTON, MUTED, OUTLINE, TEXT, TRACK},
    text::{draw_centered, draw_centered_in, draw_right_aligned, draw_runs_centered, draw_text, TextStyle},
};

/// Filled width of a bar of `width` pixels at `fraction` (clamped to 0..=1, truncated).
pub fn filled_width(width: u32, fraction: f32) -> u32 {
    (width as f32 * fraction.clamp(0.0, 1.0)) as u32
}

/// Rounded button of `width`x`BUTTON_HEIGHT` centred on `center_y`, bold label inside.
pub fn button(canvas: &mut RgbaImage, fonts: &FontBook, center_y: i32, label: &str, width: u32) -> Rect {
    let rect = Rect::centered_h(canvas.width(), center_y - BUTTON_HEIGHT as i32 / 2, width, BUTTON_HEIGHT);
    fill_rounded_rect(canvas, rect, BUTTON_RADIUS, BUTTON.opaque());
    let label_y = rect.y + (BUTTON_HEIGHT as i32 - BUTTON_LABEL_SIZE as i32) / 2;
    let style = TextStyle::new(&fonts.bold, BUTTON_LABEL_SIZE, TEXT);
    draw_centered_in(canvas, rect.x, rect.w, label_y, label, &style);
    rect
}

/// Thin track with an accent fill and a bold value label above it.
pub fn slider(canvas: &mut RgbaImage, fonts: &FontBook, y: i32, label: &str, fraction: f32) -> Rect {
    let track = bar(canvas, y, SLIDER_WIDTH, SLIDER_HEIGHT, fraction);
    let style = TextStyle::new(&fonts.bold, SLIDER_LABEL_SIZE, TEXT);
    draw_centered(canvas, y - SLIDER_LABEL_RISE, label, &style);
    track
}

/// Progress bar with an optional muted caption above.
pub fn progress_bar(canvas: &mut RgbaImage, fonts: &FontBook, y: i32, fraction: f32, caption: Option<&str>) -> Rect {
    if let Some(caption) = caption {
        let style = TextStyle::new(&fonts.regular, PROGRESS_LABEL_SIZE, MUTED);
        draw_centered(canvas, y - PROGRESS_LABEL_RISE, caption, &style);
    }
    bar(canvas, y, PROGRESS_WIDTH, PROGRESS_HEIGHT, fraction)
}

fn bar(canvas: &mut RgbaImage, y: i32, width: u32, height: u32, fraction: f32) -> Rect {
    let track = Rect::centered_h(canvas.width(), y, width, height);
    fill_rect(canvas, track, TRACK.opaque());
    let fill = filled_width(width, fraction);
    if fill > 0 {
        fill_rect(canvas, Rect { w: fill, ..track }, ACCENT.opaque());
    }
    track
}

/// Split `word` around the character at `focus`.
pub fn split_focus(word: &str, focus: usize) -> Result<(&str, &str, &str)> {
    let Some((start, ch)) = word.char_indices().nth(focus) else {
        bail!("focus index {focus} is outside \"{word}\" ({} chars)", word.chars().count());
    };
    let end = start + ch.len_utf8();
    Ok((&word[..start], &word[start..end], &word[end..]))
}

/// Large centred word with the focus letter (optimal recognition point) in the accent colour.
pub fn focus_word(canvas: &mut RgbaImage, fonts: &FontBook, y: i32, word: &str, focus: usize, size: f32) -> Result<()> {
    let (before, letter, after) = split_focus(word, focus)?;
    draw_runs_centered(canvas, y, &[(before, TEXT), (letter, ACCENT), (after, TEXT)], &fonts.bold, size);
    Ok(())
}

/// Outlined rounded box with muted lines centred on the canvas, the first one
/// `TEXT_BOX_TEXT_INSET` below the box top. Empty lines only advance the cursor.
#[allow(clippy::too_many_arguments)]
pub fn text_box(
    canvas: &mut RgbaImage,
    fonts: &FontBook,
    y: i32,
    width: u32,
    height: u32,
    lines: &[String],
    size: f32,
    line_height: i32,
) -> Rect {
    let rect = Rect::centered_h(canvas.width(), y, width, height);
    stroke_rounded_rect(canvas, rect, TEXT_BOX_RADIUS, TEXT_BOX_STROKE, OUTLINE.opaque());
    let style = TextStyle::new(&fonts.regular, size, MUTED);
    let mut line_y = y + TEXT_BOX_TEXT_INSET;
    for line in lines {
        if !line.is_empty() {
            draw_centered(canvas, line_y, line, &style);
        }
        line_y += line_height;
    }
    rect
}

/// One preset button: label on the left, muted value right-aligned.
pub fn preset_row(canvas: &mut RgbaImage, fonts: &FontBook, center_y: i32, label: &str, value: &str) -> Rect {
    let rect = Rect::centered_h(
        canvas.width(),
        center_y - PRESET_ROW_HEIGHT as i32 / 2,
        PRESET_ROW_WIDTH,
        PRESET_ROW_HEIGHT,
    );
    fill_rounded_rect(canvas, rect, PRESET_ROW_RADIUS, BUTTON.opaque());
    let text_y = rect.y + PRESET_TEXT_INSET_Y;
    draw_text(canvas, rect.x + PRESET_PADDING_X, text_y, label, &TextStyle::new(&fonts.bold, PRESET_TEXT_SIZE, TEXT));
    draw_right_aligned(
        canvas,
        rect.right() - PRESET_PADDING_X,
        text_y,
        value,
        &TextStyle::new(&fonts.bold, PRESET_TEXT_SIZE, MUTED),
    );
    rect
}

/// Muted title at `y`, then one row per `(label, value)` every `spacing` pixels.
pub fn presets(
    canvas: &mut RgbaImage,
    fonts: &FontBook,
    y: i32,
    title: &str,
    rows: &[(String, String)],
    spacing: i32,
) -> Vec<Rect> {
    draw_centered(canvas, y, title, &TextStyle::new(&fonts.regular, PRESET_TITLE_SIZE, MUTED));
    let mut center_y = y + PRESET_FIRST_ROW_DROP;
    let mut placed = Vec::with_capacity(rows.len());
    for (label, value) in rows {
        placed.push(preset_row(canvas, fonts, center_y, label, value));
        center_y += spacing;
    }
    placed
}
