use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use log::debug;

use crate::{
    config::{CanvasConfig, FrameLayout},
    font::FontBook,
    paint::{drop_shadow, linear_gradient, paste, round_corners, scale_to_width, scaled_height, Rect},
    text::{draw_centered, TextStyle},
};

use super::FrameScene;

/// Decode a capture as RGBA.
pub fn load_capture(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).with_context(|| format!("open capture {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// Where the scaled capture lands: centred horizontally, `bottom_margin` above the bottom edge.
pub fn phone_rect(canvas_cfg: &CanvasConfig, layout: &FrameLayout, capture: (u32, u32)) -> Rect {
    let phone_w = (canvas_cfg.width as f32 * layout.phone_width_ratio) as u32;
    let phone_h = scaled_height(capture, phone_w);
    Rect::new(
        (canvas_cfg.width as i32 - phone_w as i32) / 2,
        canvas_cfg.height as i32 - phone_h as i32 - layout.bottom_margin as i32,
        phone_w,
        phone_h,
    )
}

/// Gradient, shadowed rounded capture, then headline and subline on top.
pub fn compose_frame(
    scene: &FrameScene,
    capture: &RgbaImage,
    canvas_cfg: &CanvasConfig,
    layout: &FrameLayout,
    fonts: &FontBook,
) -> RgbaImage {
    let mut canvas = linear_gradient(canvas_cfg.width, canvas_cfg.height, scene.bg_top, scene.bg_bottom);

    let target = phone_rect(canvas_cfg, layout, capture.dimensions());
    let phone = round_corners(&scale_to_width(capture, target.w), layout.corner_radius);
    let target = Rect { w: phone.width(), h: phone.height(), ..target };
    debug!(target: "scene", "{}: capture {:?} -> {:?}", scene.file, capture.dimensions(), target);

    drop_shadow(&mut canvas, target, &layout.shadow());
    paste(&mut canvas, &phone, target.x as i64, target.y as i64);

    let headline = TextStyle::new(&fonts.display, layout.headline_size, layout.headline_color);
    draw_centered(&mut canvas, layout.headline_y, &scene.headline, &headline);
    let subline = TextStyle::new(&fonts.display, layout.subline_size, layout.subline_color);
    draw_centered(&mut canvas, layout.headline_y + layout.subline_gap, &scene.subline, &subline);
    canvas
}

/// Load `scene.file` from `input_dir` and compose it.
pub fn render_frame(
    scene: &FrameScene,
    input_dir: &Path,
    canvas_cfg: &CanvasConfig,
    layout: &FrameLayout,
    fonts: &FontBook,
) -> Result<RgbaImage> {
    let capture = load_capture(&input_dir.join(&scene.file))?;
    Ok(compose_frame(scene, &capture, canvas_cfg, layout, fonts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Color, TEXT};
    use image::Rgba;

    fn scene() -> FrameScene {
        FrameScene {
            file: "capture.png".into(),
            headline: "Read 3x Faster".into(),
            subline: "One word at a time.".into(),
            bg_top: Color::rgb(0x1A, 0x0A, 0x0A),
            bg_bottom: Color::rgb(0x0A, 0x0A, 0x1A),
            accent: None,
        }
    }

    #[test]
    fn phone_rect_matches_storefront_layout() {
        let rect = phone_rect(&CanvasConfig::default(), &FrameLayout::default(), (1179, 2556));
        assert_eq!(rect.w, 1057);
        assert_eq!(rect.h, 2291);
        assert_eq!(rect.x, 116);
        assert_eq!(rect.bottom(), 2796 - 80);
    }

    #[test]
    fn composed_frame_layers() {
        let canvas_cfg = CanvasConfig { width: 400, height: 800 };
        let layout = FrameLayout {
            corner_radius: 20,
            bottom_margin: 40,
            shadow_blur: 4.0,
            headline_y: 40,
            headline_size: 32.0,
            subline_gap: 60,
            subline_size: 16.0,
            ..FrameLayout::default()
        };
        let green = Rgba([0, 200, 0, 255]);
        let capture = RgbaImage::from_pixel(200, 300, green);
        let scene = scene();
        let img = compose_frame(&scene, &capture, &canvas_cfg, &layout, &FontBook::builtin());
        assert_eq!(img.dimensions(), (400, 800));

        let rect = phone_rect(&canvas_cfg, &layout, (200, 300));
        assert_eq!((rect.w, rect.h), (328, 492));
        // capture centre is the capture colour
        let mid = img.get_pixel(200, (rect.y + rect.h as i32 / 2) as u32);
        assert_eq!(*mid, green);
        // rounded corner shows background, not capture
        let corner = img.get_pixel(rect.x as u32, rect.y as u32);
        assert_ne!(*corner, green);
        // gradient untouched at the top-left
        assert_eq!(*img.get_pixel(0, 0), scene.bg_top.opaque());
        // headline drawn in white
        let headline_band = 40..80u32;
        assert!(headline_band.into_iter().any(|y| (0..400).any(|x| *img.get_pixel(x, y) == TEXT.opaque())));
        // subline in the configured grey
        assert!(img.pixels().any(|p| *p == layout.subline_color.opaque()));
        // shadow below-right of the capture is darker than the plain gradient
        let probe_y = (rect.bottom() + 4) as u32;
        let probe_x = 200;
        let plain = linear_gradient(400, 800, scene.bg_top, scene.bg_bottom);
        let shaded = img.get_pixel(probe_x, probe_y);
        let base = plain.get_pixel(probe_x, probe_y);
        assert!(shaded[0] <= base[0] && shaded[2] <= base[2]);
        assert!(shaded.0 != base.0, "shadow should darken {probe_x},{probe_y}");
    }

    #[test]
    fn missing_capture_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_frame(&scene(), dir.path(), &CanvasConfig::default(), &FrameLayout::default(), &FontBook::builtin())
            .unwrap_err();
        assert!(format!("{err:#}").contains("capture.png"), "{err:#}");
    }
}
