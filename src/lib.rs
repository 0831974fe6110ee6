pub mod config;
pub mod font;
pub mod inspect;
pub mod layout;
pub mod output;
pub mod paint;
pub mod palette;
pub mod pipeline;
pub mod scene;
pub mod text;
pub mod widgets;

// Curated re-exports
pub use config::ShotConfig;
pub use font::FontBook;
pub use output::{Manifest, OutputRecord};
pub use scene::SceneSet;
