//! Raster drawing primitives over `RgbaImage`.
//!
//! Everything here is plain CPU pixel work: solid/gradient fills, rounded
//! rectangle fills & strokes (evaluated as a rounded-box signed distance at each
//! pixel centre), the rounded-corner alpha mask, and the blurred drop shadow.
//! Filtering (resize, Gaussian blur, alpha overlay) is delegated to `image::imageops`.

use image::{imageops, DynamicImage, Pixel, Rgba, RgbaImage, RgbImage};

use crate::palette::{Color, SHADOW};

/// Axis aligned pixel rectangle. `x`/`y` may be negative (partially off canvas).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect of the given size centred horizontally in a span of `outer_w` pixels.
    pub fn centered_h(outer_w: u32, y: i32, w: u32, h: u32) -> Self {
        Self::new((outer_w as i32 - w as i32) / 2, y, w, h)
    }

    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..self }
    }

    /// Shrink by `by` on every side (saturating at zero size).
    pub fn inset(self, by: u32) -> Self {
        Self {
            x: self.x + by as i32,
            y: self.y + by as i32,
            w: self.w.saturating_sub(by * 2),
            h: self.h.saturating_sub(by * 2),
        }
    }
}

/// Parameters of the blurred shadow drawn behind a foreground element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowStyle {
    pub offset: (i32, i32),
    pub radius: u32,
    pub alpha: u8,
    pub blur_sigma: f32,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self { offset: (8, 8), radius: 40, alpha: 80, blur_sigma: 15.0 }
    }
}

pub fn solid(width: u32, height: u32, color: Color) -> RgbaImage {
    RgbaImage::from_pixel(width, height, color.opaque())
}

/// Vertical two-stop gradient: row 0 is `top`, the last row is `bottom`.
pub fn linear_gradient(width: u32, height: u32, top: Color, bottom: Color) -> RgbaImage {
    let span = height.saturating_sub(1).max(1) as f32;
    let rows: Vec<Rgba<u8>> = (0..height)
        .map(|y| top.lerp(bottom, y as f32 / span).opaque())
        .collect();
    RgbaImage::from_fn(width, height, |_, y| rows[y as usize])
}

/// Source-over blend of `color` scaled by `coverage` (0..1). Off-canvas writes are dropped.
#[inline]
pub fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }
    let a = (color[3] as f32 * coverage.clamp(0.0, 1.0)).round() as u8;
    if a == 0 {
        return;
    }
    let px = canvas.get_pixel_mut(x as u32, y as u32);
    if a == 255 {
        *px = Rgba([color[0], color[1], color[2], 255]);
    } else {
        px.blend(&Rgba([color[0], color[1], color[2], a]));
    }
}

pub fn fill_rect(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    for_each_clipped(canvas, rect, |canvas, x, y| blend_pixel(canvas, x, y, color, 1.0));
}

/// Signed distance from `(px, py)` (relative to the box centre) to a rounded box of
/// half extents `hw`/`hh` and corner radius `r`. Negative inside.
fn rounded_box_sdf(px: f32, py: f32, hw: f32, hh: f32, r: f32) -> f32 {
    let qx = px.abs() - hw + r;
    let qy = py.abs() - hh + r;
    let ox = qx.max(0.0);
    let oy = qy.max(0.0);
    (ox * ox + oy * oy).sqrt() + qx.max(qy).min(0.0) - r
}

/// True when the centre of local pixel `(x, y)` lies inside the rounded rect of
/// size `w`x`h` anchored at the origin.
#[inline]
fn inside_rounded(x: u32, y: u32, w: u32, h: u32, radius: u32) -> bool {
    let hw = w as f32 * 0.5;
    let hh = h as f32 * 0.5;
    let r = radius.min(w.min(h) / 2) as f32;
    rounded_box_sdf(x as f32 + 0.5 - hw, y as f32 + 0.5 - hh, hw, hh, r) <= 0.0
}

pub fn fill_rounded_rect(canvas: &mut RgbaImage, rect: Rect, radius: u32, color: Rgba<u8>) {
    for_each_clipped(canvas, rect, |canvas, x, y| {
        let (lx, ly) = ((x - rect.x) as u32, (y - rect.y) as u32);
        if inside_rounded(lx, ly, rect.w, rect.h, radius) {
            blend_pixel(canvas, x, y, color, 1.0);
        }
    });
}

/// Outline of width `stroke` drawn inward from the rect edge.
pub fn stroke_rounded_rect(canvas: &mut RgbaImage, rect: Rect, radius: u32, stroke: u32, color: Rgba<u8>) {
    let inner = rect.inset(stroke);
    let inner_radius = radius.saturating_sub(stroke);
    for_each_clipped(canvas, rect, |canvas, x, y| {
        let (lx, ly) = ((x - rect.x) as u32, (y - rect.y) as u32);
        if !inside_rounded(lx, ly, rect.w, rect.h, radius) {
            return;
        }
        let in_hole = inner.w > 0
            && inner.h > 0
            && x >= inner.x
            && y >= inner.y
            && x < inner.right()
            && y < inner.bottom()
            && inside_rounded((x - inner.x) as u32, (y - inner.y) as u32, inner.w, inner.h, inner_radius);
        if !in_hole {
            blend_pixel(canvas, x, y, color, 1.0);
        }
    });
}

/// Mask `img` to a rounded rectangle covering the whole image. Pixels outside the
/// rounded boundary become fully transparent; pixels inside keep their alpha.
/// Radius 0 returns an unchanged copy.
pub fn round_corners(img: &RgbaImage, radius: u32) -> RgbaImage {
    let mut out = img.clone();
    if radius == 0 {
        return out;
    }
    let (w, h) = out.dimensions();
    for (x, y, p) in out.enumerate_pixels_mut() {
        if !inside_rounded(x, y, w, h, radius) {
            p[3] = 0;
        }
    }
    out
}

/// Blurred, semi-transparent dark rounded rect offset from `target`, composited onto
/// the canvas. Callers paste the foreground afterwards.
pub fn drop_shadow(canvas: &mut RgbaImage, target: Rect, style: &ShadowStyle) {
    let pad = (style.blur_sigma.max(0.0) * 3.0).ceil() as u32;
    let shadow = target.translate(style.offset.0, style.offset.1);
    let mut layer = RgbaImage::new(shadow.w + pad * 2, shadow.h + pad * 2);
    fill_rounded_rect(
        &mut layer,
        Rect::new(pad as i32, pad as i32, shadow.w, shadow.h),
        style.radius,
        SHADOW.with_alpha(style.alpha),
    );
    let layer = if style.blur_sigma > 0.0 { imageops::blur(&layer, style.blur_sigma) } else { layer };
    imageops::overlay(canvas, &layer, (shadow.x - pad as i32) as i64, (shadow.y - pad as i32) as i64);
}

/// Alpha-composite `img` with its top-left corner at `(x, y)`.
pub fn paste(canvas: &mut RgbaImage, img: &RgbaImage, x: i64, y: i64) {
    imageops::overlay(canvas, img, x, y);
}

/// Height that keeps the aspect ratio of `(w, h)` at `width`, rounded down.
pub fn scaled_height((w, h): (u32, u32), width: u32) -> u32 {
    (h as u64 * width as u64 / w.max(1) as u64) as u32
}

/// Lanczos resize to `width`, keeping the aspect ratio.
pub fn scale_to_width(img: &RgbaImage, width: u32) -> RgbaImage {
    let height = scaled_height(img.dimensions(), width);
    imageops::resize(img, width.max(1), height.max(1), imageops::FilterType::Lanczos3)
}

/// Drop alpha for export.
pub fn flatten(canvas: &RgbaImage) -> RgbImage {
    DynamicImage::ImageRgba8(canvas.clone()).to_rgb8()
}

fn for_each_clipped(canvas: &mut RgbaImage, rect: Rect, mut f: impl FnMut(&mut RgbaImage, i32, i32)) {
    let x0 = rect.x.max(0);
    let y0 = rect.y.max(0);
    let x1 = rect.right().min(canvas.width() as i32);
    let y1 = rect.bottom().min(canvas.height() as i32);
    for y in y0..y1 {
        for x in x0..x1 {
            f(canvas, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{ACCENT, BUTTON};

    #[test]
    fn gradient_endpoints_match_stops() {
        let top = Color::rgb(0x1A, 0x0A, 0x0A);
        let bottom = Color::rgb(0x0A, 0x0A, 0x1A);
        let img = linear_gradient(7, 300, top, bottom);
        assert_eq!(img.dimensions(), (7, 300));
        for x in 0..7 {
            assert_eq!(*img.get_pixel(x, 0), top.opaque());
            assert_eq!(*img.get_pixel(x, 299), bottom.opaque());
        }
        // full range stays monotonic
        let wide = linear_gradient(1, 256, Color::rgb(0, 0, 0), Color::rgb(255, 255, 255));
        let mut last = 0u8;
        for y in 0..256 {
            let v = wide.get_pixel(0, y)[0];
            assert!(v >= last, "row {y} went backwards ({v} < {last})");
            last = v;
        }
        assert_eq!(last, 255);
    }

    #[test]
    fn single_row_gradient_is_top() {
        let img = linear_gradient(3, 1, ACCENT, BUTTON);
        assert_eq!(*img.get_pixel(1, 0), ACCENT.opaque());
    }

    #[test]
    fn zero_radius_mask_is_identity() {
        let src = RgbaImage::from_fn(40, 30, |x, y| Rgba([x as u8, y as u8, 7, 255]));
        assert_eq!(round_corners(&src, 0), src);
        // a 1px radius on a tiny image still never clears edge midpoints
        let masked = round_corners(&src, 1);
        assert_eq!(masked.get_pixel(20, 0)[3], 255);
    }

    #[test]
    fn rounded_mask_clears_corners_only() {
        let src = solid(200, 100, ACCENT);
        let masked = round_corners(&src, 40);
        for (x, y) in [(0, 0), (199, 0), (0, 99), (199, 99), (5, 5)] {
            assert_eq!(masked.get_pixel(x, y)[3], 0, "corner ({x},{y}) should be transparent");
        }
        for (x, y) in [(100, 50), (100, 0), (0, 50), (199, 50), (40, 40)] {
            assert_eq!(masked.get_pixel(x, y)[3], 255, "({x},{y}) should stay opaque");
        }
        // colour channels untouched
        assert_eq!(masked.get_pixel(100, 50).to_rgb().0, ACCENT.0);
    }

    #[test]
    fn oversize_radius_is_clamped_to_pill() {
        let masked = round_corners(&solid(100, 20, ACCENT), 500);
        assert_eq!(masked.get_pixel(50, 10)[3], 255);
        assert_eq!(masked.get_pixel(0, 0)[3], 0);
        assert_eq!(masked.get_pixel(10, 10)[3], 255);
    }

    #[test]
    fn fill_rect_clips_off_canvas() {
        let mut canvas = solid(10, 10, BUTTON);
        fill_rect(&mut canvas, Rect::new(-5, 8, 8, 10), ACCENT.opaque());
        assert_eq!(*canvas.get_pixel(0, 9), ACCENT.opaque());
        assert_eq!(*canvas.get_pixel(2, 9), ACCENT.opaque());
        assert_eq!(*canvas.get_pixel(3, 9), BUTTON.opaque());
        assert_eq!(*canvas.get_pixel(0, 7), BUTTON.opaque());
    }

    #[test]
    fn stroke_leaves_interior_untouched() {
        let mut canvas = solid(60, 60, BUTTON);
        stroke_rounded_rect(&mut canvas, Rect::new(10, 10, 40, 40), 8, 3, ACCENT.opaque());
        assert_eq!(*canvas.get_pixel(30, 10), ACCENT.opaque());
        assert_eq!(*canvas.get_pixel(30, 12), ACCENT.opaque());
        assert_eq!(*canvas.get_pixel(30, 13), BUTTON.opaque());
        assert_eq!(*canvas.get_pixel(30, 30), BUTTON.opaque());
        assert_eq!(*canvas.get_pixel(10, 10), BUTTON.opaque(), "rounded corner stays clear");
    }

    #[test]
    fn shadow_darkens_offset_region_only() {
        let bg = Color::rgb(200, 200, 200);
        let mut canvas = solid(200, 200, bg);
        let target = Rect::new(50, 50, 60, 60);
        drop_shadow(&mut canvas, target, &ShadowStyle { offset: (8, 8), radius: 10, alpha: 80, blur_sigma: 3.0 });
        let centre = canvas.get_pixel(88, 88);
        assert!(centre[0] < 200, "shadow centre should be darker, got {centre:?}");
        assert_eq!(centre[3], 255);
        assert_eq!(*canvas.get_pixel(5, 5), bg.opaque(), "far pixels untouched");
        assert_eq!(*canvas.get_pixel(195, 195), bg.opaque());
    }

    #[test]
    fn scale_keeps_aspect() {
        let img = RgbaImage::new(300, 650);
        let out = scale_to_width(&img, 150);
        assert_eq!(out.dimensions(), (150, 325));
        assert_eq!(scaled_height((1179, 2556), 1057), 2291);
    }

    #[test]
    fn flatten_drops_alpha() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        let rgb = flatten(&img);
        assert_eq!(rgb.get_pixel(1, 1).0, [1, 2, 3]);
    }
}
