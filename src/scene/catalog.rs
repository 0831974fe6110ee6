//! Built-in BlitzRead storefront scenes.

use crate::{
    font::Weight,
    layout::{BUTTON_WIDTH, FOCUS_WORD_SIZE},
    palette::{Color, ACCENT, BACKGROUND, MUTED, TEXT},
};

use super::{Element, FrameScene, MockupScene};

fn text(text: &str, y: i32, size: f32, color: Color, weight: Weight) -> Element {
    Element::Text { text: text.into(), y, size, color, weight }
}

fn app_title() -> Element {
    text("BlitzRead", 200, 64.0, TEXT, Weight::Bold)
}

fn tagline(line: &str) -> Element {
    text(line, 320, 40.0, MUTED, Weight::Regular)
}

fn focus(word: &str, index: usize) -> Element {
    Element::FocusWord { word: word.into(), focus: index, y: 1200, size: FOCUS_WORD_SIZE }
}

fn wpm(label: &str) -> Element {
    text(label, 1500, 48.0, MUTED, Weight::Regular)
}

fn progress(caption: &str, fraction: f32) -> Element {
    Element::Progress { y: 2200, fraction, label: Some(caption.into()) }
}

fn button(label: &str, center_y: i32) -> Element {
    Element::Button { label: label.into(), center_y, width: BUTTON_WIDTH }
}

fn scene(name: &str, file: &str, elements: Vec<Element>) -> MockupScene {
    MockupScene { name: name.into(), file: file.into(), background: BACKGROUND, elements }
}

pub fn mockups() -> Vec<MockupScene> {
    vec![
        scene(
            "Reading in progress",
            "1-reading-progress.png",
            vec![
                app_title(),
                focus("reading", 2),
                wpm("350 WPM"),
                progress("42% Complete", 0.42),
                button("⏸ Pause", 2500),
            ],
        ),
        scene(
            "Text input screen",
            "2-text-input.png",
            vec![
                app_title(),
                tagline("Speed Read Anything"),
                Element::TextBox {
                    y: 600,
                    width: 1000,
                    height: 800,
                    lines: [
                        "Paste or type any text",
                        "to start speed reading.",
                        "",
                        "Articles, books, emails,",
                        "anything you want to",
                        "read faster.",
                    ]
                    .map(String::from)
                    .to_vec(),
                    size: 38.0,
                    line_height: 80,
                },
                button("Start Reading", 1700),
                button("📋 Paste Text", 1900),
            ],
        ),
        scene(
            "WPM adjustment",
            "3-wpm-adjustment.png",
            vec![
                app_title(),
                tagline("Customize Your Speed"),
                text("Reading Speed", 800, 48.0, TEXT, Weight::Regular),
                Element::Slider { y: 1000, label: "450 WPM".into(), fraction: 0.7 },
                Element::Presets {
                    y: 1300,
                    title: "Quick Presets:".into(),
                    rows: [
                        ("🐢 Beginner", "200 WPM"),
                        ("📖 Average", "300 WPM"),
                        ("⚡️ Fast", "450 WPM"),
                        ("🚀 Expert", "700 WPM"),
                    ]
                    .map(|(l, v)| (l.to_string(), v.to_string()))
                    .to_vec(),
                    spacing: 200,
                },
                button("Start Reading", 2500),
            ],
        ),
        scene(
            "Different word reading",
            "4-reading-different.png",
            vec![
                app_title(),
                focus("technology", 1),
                wpm("550 WPM"),
                progress("78% Complete", 0.78),
                text("Tap to Pause", 2400, 40.0, MUTED, Weight::Regular),
            ],
        ),
    ]
}

fn framed(file: &str, headline: &str, subline: &str, bg_top: Color, bg_bottom: Color) -> FrameScene {
    FrameScene {
        file: file.into(),
        headline: headline.into(),
        subline: subline.into(),
        bg_top,
        bg_bottom,
        accent: Some(ACCENT),
    }
}

pub fn frames() -> Vec<FrameScene> {
    vec![
        framed(
            "06_playing_word2.png",
            "Read 3x Faster",
            "One word at a time. Laser focus.",
            Color::rgb(0x1A, 0x0A, 0x0A),
            Color::rgb(0x0A, 0x0A, 0x1A),
        ),
        framed(
            "01_initial.png",
            "Paste Any Text",
            "Articles, books, emails \u{2014} speed read anything.",
            Color::rgb(0x0A, 0x0A, 0x1A),
            Color::rgb(0x1A, 0x0A, 0x2A),
        ),
        framed(
            "03_reading.png",
            "Smart Word Timing",
            "Longer words linger. Short ones fly.",
            Color::rgb(0x0A, 0x1A, 0x1A),
            Color::rgb(0x0A, 0x0A, 0x1A),
        ),
        framed(
            "02_with_text.png",
            "Built for Focus",
            "Dark theme. Zero distractions.",
            Color::rgb(0x1A, 0x1A, 0x0A),
            Color::rgb(0x0A, 0x0A, 0x1A),
        ),
    ]
}
