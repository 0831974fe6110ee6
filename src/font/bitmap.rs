//! Built-in 5x7 bitmap face used when no outline font can be loaded.
//! Covers printable ASCII; anything else is skipped.

use image::{Rgba, RgbaImage};

use super::TextExtent;
use crate::paint::{fill_rect, Rect};

const FIRST: u32 = 0x20;
const ADVANCE_UNITS: u32 = 6;
const ASCENT_UNITS: u32 = 7;
const LINE_UNITS: u32 = 8;

/// Column-major glyphs, bit 0 is the top row.
const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x02, 0x01, 0x02, 0x04, 0x02], // ~
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitmapFont;

impl BitmapFont {
    /// Integer pixel scale so the 8-unit line box approximates `size` pixels.
    pub fn scale(size: f32) -> u32 {
        (size / LINE_UNITS as f32).round().max(1.0) as u32
    }

    pub fn ascent(size: f32) -> f32 {
        (ASCENT_UNITS * Self::scale(size)) as f32
    }

    pub fn descent(size: f32) -> f32 {
        -(((LINE_UNITS - ASCENT_UNITS) * Self::scale(size)) as f32)
    }

    fn glyph(ch: char) -> Option<&'static [u8; 5]> {
        let c = ch as u32;
        (FIRST..FIRST + GLYPHS.len() as u32)
            .contains(&c)
            .then(|| &GLYPHS[(c - FIRST) as usize])
    }

    /// Non-empty columns as (unit x, bits) in pen order, plus the total advance in units.
    fn columns(text: &str) -> (Vec<(u32, u8)>, u32) {
        let mut cols = Vec::new();
        let mut pen = 0u32;
        for ch in text.chars() {
            let Some(glyph) = Self::glyph(ch) else { continue };
            for (i, bits) in glyph.iter().enumerate() {
                if *bits != 0 {
                    cols.push((pen + i as u32, *bits));
                }
            }
            pen += ADVANCE_UNITS;
        }
        (cols, pen)
    }

    pub fn measure(text: &str, size: f32) -> TextExtent {
        let s = Self::scale(size);
        let (cols, pen) = Self::columns(text);
        let (ink_left, ink_right) = match (cols.first(), cols.last()) {
            (Some(first), Some(last)) => ((first.0 * s) as i32, ((last.0 + 1) * s) as i32),
            _ => (0, 0),
        };
        TextExtent {
            advance: (pen * s) as f32,
            ink_left,
            ink_right,
            ascent: Self::ascent(size),
            descent: Self::descent(size),
        }
    }

    pub fn draw(canvas: &mut RgbaImage, x: i32, top: i32, text: &str, size: f32, color: Rgba<u8>) {
        let s = Self::scale(size);
        let (cols, _) = Self::columns(text);
        for (col, bits) in cols {
            for row in 0..LINE_UNITS {
                if bits & (1 << row) != 0 {
                    let px = Rect::new(x + (col * s) as i32, top + (row * s) as i32, s, s);
                    fill_rect(canvas, px, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_coverage() {
        assert!(BitmapFont::glyph(' ').is_some());
        assert!(BitmapFont::glyph('~').is_some());
        assert!(BitmapFont::glyph('\u{7f}').is_none());
        assert!(BitmapFont::glyph('⏸').is_none());
        assert_eq!(BitmapFont::glyph('A'), Some(&[0x7E, 0x11, 0x11, 0x11, 0x7E]));
    }

    #[test]
    fn measure_skips_unmapped_and_trims_ink() {
        // size 16 -> scale 2
        let m = BitmapFont::measure("I", 16.0);
        assert_eq!(m.advance, 12.0);
        assert_eq!((m.ink_left, m.ink_right), (2, 8));
        let with_emoji = BitmapFont::measure("📋I", 16.0);
        assert_eq!(with_emoji, m);
        let blank = BitmapFont::measure("   ", 16.0);
        assert_eq!(blank.ink_width(), 0);
        assert_eq!(blank.advance, 36.0);
    }

    #[test]
    fn draw_matches_measure() {
        let mut canvas = RgbaImage::new(64, 32);
        let white = Rgba([255, 255, 255, 255]);
        BitmapFont::draw(&mut canvas, 4, 2, "Hi", 16.0, white);
        let m = BitmapFont::measure("Hi", 16.0);
        let inked: Vec<u32> = (0..64)
            .filter(|x| (0..32).any(|y| canvas.get_pixel(*x, y)[3] != 0))
            .collect();
        assert_eq!(*inked.first().unwrap() as i32, 4 + m.ink_left);
        assert_eq!(*inked.last().unwrap() as i32 + 1, 4 + m.ink_right);
    }
}
