use std::{fs, path::PathBuf};

use shotframe::{
    config::FontConfig,
    font::{Typeface, Weight},
    paint::solid,
    palette::{BACKGROUND, TEXT},
    text::{draw_centered, TextStyle},
    FontBook, ShotConfig,
};

#[test]
fn missing_font_paths_fall_back_to_builtin() {
    let cfg = FontConfig {
        regular: vec![PathBuf::from("/nope/Regular.ttf")],
        bold: vec![],
        display: vec![PathBuf::from("/nope/Display.otf"), PathBuf::from("/nope/Other.ttc")],
    };
    let book = FontBook::load(&cfg);
    for w in [Weight::Regular, Weight::Bold, Weight::Display] {
        assert!(book.face(w).is_builtin(), "{w:?}");
    }
    // fallback still draws legible text
    let mut canvas = solid(600, 120, BACKGROUND);
    draw_centered(&mut canvas, 20, "BlitzRead", &TextStyle::new(&book.bold, 64.0, TEXT));
    assert!(canvas.pixels().any(|p| *p == TEXT.opaque()));
}

#[test]
fn discovered_font_when_available() {
    // Only meaningful on hosts that ship one of the default faces.
    let defaults = FontConfig::default();
    let Some(present) = defaults.regular.iter().find(|p| p.exists()) else {
        return;
    };
    match Typeface::from_file(present) {
        Ok(face) => {
            assert!(!face.is_builtin());
            let m = face.measure("BlitzRead", 64.0);
            assert!(m.ink_width() > 100, "{m:?}");
        }
        // collections or exotic formats may be refused; discovery then falls through
        Err(_) => assert!(Typeface::discover(&[present]).is_builtin()),
    }
}

#[test]
fn outline_font_centres_within_one_pixel() {
    // Runs only where a DejaVu face is installed.
    let candidates = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    ];
    let Some(path) = candidates.iter().map(PathBuf::from).find(|p| p.exists()) else {
        return;
    };
    let face = Typeface::from_file(&path).expect("DejaVu loads");
    assert!(!face.is_builtin());

    let width = 1290;
    for (text, size) in [("Read 3x Faster", 96.0), ("One word at a time. Laser focus.", 42.0), ("BlitzRead", 64.0)] {
        let mut canvas = solid(width, 240, BACKGROUND);
        draw_centered(&mut canvas, 40, text, &TextStyle::new(&face, size, TEXT));
        let inked: Vec<u32> = (0..width)
            .filter(|&x| (0..240).any(|y| canvas.get_pixel(x, y).0[..3] != BACKGROUND.0))
            .collect();
        let (first, last) = (inked[0] as i32, *inked.last().unwrap() as i32);
        let left = first;
        let right = width as i32 - 1 - last;
        assert!((left - right).abs() <= 1, "{text} @ {size}: left {left} right {right}");
        // measured bounds cover the drawn ink; faint edge columns may round to nothing
        let m = face.measure(text, size);
        let drawn = last - first + 1;
        assert!(m.ink_width() as i32 >= drawn && m.ink_width() as i32 - drawn <= 2, "{text}: drawn {drawn}, {m:?}");
    }
}

#[test]
fn layered_config_files_merge() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.ron");
    let local = dir.path().join("local.ron");
    fs::write(&base, r#"(output: (mockup_dir: "a/mock", marketing_dir: "a/market"), frame: (corner_radius: 30))"#).unwrap();
    fs::write(&local, r##"(output: (marketing_dir: "b/market"), frame: (headline_color: "#FFEEDD"))"##).unwrap();

    let (cfg, used, errors) = ShotConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.output.mockup_dir, PathBuf::from("a/mock"));
    assert_eq!(cfg.output.marketing_dir, PathBuf::from("b/market"));
    assert_eq!(cfg.frame.corner_radius, 30);
    assert_eq!(cfg.frame.headline_color.to_string(), "#FFEEDD");
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}

#[test]
fn broken_layer_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.ron");
    fs::write(&broken, "(canvas: (width: ").unwrap();
    let (cfg, used, errors) = ShotConfig::load_layered([&broken]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("parse error"));
    assert_eq!(cfg, ShotConfig::default());
}
