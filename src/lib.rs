pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod rasterizer;
pub mod readers;
pub mod render;
pub mod settings;
pub mod utils;

pub use error::{ProcessingError, Result};
pub use settings::RenderSettings;
