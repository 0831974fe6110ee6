//! Single-line text placement: centred, left and right aligned, and multi-colour runs.
//! No wrapping; anything past the canvas edge is clipped by the pixel writer.

use image::RgbaImage;

use crate::{
    font::{TextExtent, Typeface},
    palette::Color,
};

/// What the `y` passed to the draw helpers refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Top of the line box (ascender line).
    #[default]
    Top,
    Baseline,
}

#[derive(Debug, Clone, Copy)]
pub struct TextStyle<'a> {
    pub face: &'a Typeface,
    pub size: f32,
    pub color: Color,
    pub anchor: Anchor,
}

impl<'a> TextStyle<'a> {
    pub fn new(face: &'a Typeface, size: f32, color: Color) -> Self {
        Self { face, size, color, anchor: Anchor::Top }
    }

    pub fn anchored(self, anchor: Anchor) -> Self {
        Self { anchor, ..self }
    }

    pub fn measure(&self, text: &str) -> TextExtent {
        self.face.measure(text, self.size)
    }

    fn top_of(&self, y: i32) -> i32 {
        match self.anchor {
            Anchor::Top => y,
            Anchor::Baseline => y - self.face.ascent(self.size).round() as i32,
        }
    }
}

/// Pen x that centres the ink of `extent` inside `[span_x, span_x + span_w)`.
pub fn centered_pen_x(extent: &TextExtent, span_x: i32, span_w: u32) -> i32 {
    span_x + (span_w as i32 - extent.ink_width() as i32) / 2 - extent.ink_left
}

/// Draw with the pen origin at `x`.
pub fn draw_text(canvas: &mut RgbaImage, x: i32, y: i32, text: &str, style: &TextStyle) {
    let top = style.top_of(y);
    style.face.draw(canvas, x, top, text, style.size, style.color.opaque());
}

/// Centre horizontally on the whole canvas. Returns the pen x used.
pub fn draw_centered(canvas: &mut RgbaImage, y: i32, text: &str, style: &TextStyle) -> i32 {
    let width = canvas.width();
    draw_centered_in(canvas, 0, width, y, text, style)
}

/// Centre horizontally inside a span. Returns the pen x used.
pub fn draw_centered_in(canvas: &mut RgbaImage, span_x: i32, span_w: u32, y: i32, text: &str, style: &TextStyle) -> i32 {
    let x = centered_pen_x(&style.measure(text), span_x, span_w);
    draw_text(canvas, x, y, text, style);
    x
}

/// Place so the ink ends at `right_x`.
pub fn draw_right_aligned(canvas: &mut RgbaImage, right_x: i32, y: i32, text: &str, style: &TextStyle) -> i32 {
    let x = right_x - style.measure(text).ink_right;
    draw_text(canvas, x, y, text, style);
    x
}

/// Consecutive runs in different colours, centred as one string. Runs advance by
/// their own advance width (no kerning across run boundaries).
pub fn draw_runs_centered(canvas: &mut RgbaImage, y: i32, runs: &[(&str, Color)], face: &Typeface, size: f32) {
    let joined: String = runs.iter().map(|(t, _)| *t).collect();
    let whole = face.measure(&joined, size);
    let mut pen = centered_pen_x(&whole, 0, canvas.width()) as f32;
    for (text, color) in runs {
        let style = TextStyle::new(face, size, *color);
        draw_text(canvas, pen.round() as i32, y, text, &style);
        pen += face.measure(text, size).advance;
    }
}
