pub mod browser;
pub mod image_output;
pub mod scratch;

pub use browser::HeadlessBrowser;
pub use image_output::{fit_to_viewport, save_png};
pub use scratch::ScratchFiles;

use crate::error::Result;
use async_trait::async_trait;

/// Turns map markup into encoded image bytes.
///
/// The returned image may be larger than requested; callers crop it with
/// [`fit_to_viewport`].
#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn render_to_image(&self, markup: &str, width: u32, height: u32) -> Result<Vec<u8>>;
}
