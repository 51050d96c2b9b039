pub mod document;
pub mod map_renderer;

pub use document::{MapDocument, Marker};
pub use map_renderer::MapRenderer;
