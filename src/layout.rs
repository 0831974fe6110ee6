//! Fixed geometry for the mockup widgets. Scene coordinates are authored
//! against the default 1290x2796 canvas.

pub const CANVAS_WIDTH: u32 = 1290;
pub const CANVAS_HEIGHT: u32 = 2796;

pub const BUTTON_HEIGHT: u32 = 120;
pub const BUTTON_RADIUS: u32 = 20;
pub const BUTTON_WIDTH: u32 = 600;
pub const BUTTON_LABEL_SIZE: f32 = 48.0;

pub const SLIDER_WIDTH: u32 = 800;
pub const SLIDER_HEIGHT: u32 = 8;
/// Value label sits this far above the slider track.
pub const SLIDER_LABEL_RISE: i32 = 100;
pub const SLIDER_LABEL_SIZE: f32 = 56.0;

pub const PROGRESS_WIDTH: u32 = 800;
pub const PROGRESS_HEIGHT: u32 = 12;
pub const PROGRESS_LABEL_RISE: i32 = 80;
pub const PROGRESS_LABEL_SIZE: f32 = 40.0;

pub const FOCUS_WORD_SIZE: f32 = 180.0;

pub const TEXT_BOX_RADIUS: u32 = 20;
pub const TEXT_BOX_STROKE: u32 = 3;
pub const TEXT_BOX_TEXT_INSET: i32 = 100;

pub const PRESET_ROW_WIDTH: u32 = 900;
pub const PRESET_ROW_HEIGHT: u32 = 100;
pub const PRESET_ROW_RADIUS: u32 = 15;
pub const PRESET_TEXT_SIZE: f32 = 42.0;
pub const PRESET_PADDING_X: i32 = 50;
pub const PRESET_TEXT_INSET_Y: i32 = 25;
/// Distance from the presets title to the centre of the first row.
pub const PRESET_FIRST_ROW_DROP: i32 = 150;
pub const PRESET_TITLE_SIZE: f32 = 44.0;
