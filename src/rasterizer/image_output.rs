use crate::error::{ProcessingError, Result};
use image::{imageops, ImageFormat, RgbaImage};
use std::path::Path;

/// Decode a screenshot and cut it to exactly `width`×`height` from the top-left.
///
/// A screenshot smaller than the viewport is padded with transparent pixels.
pub fn fit_to_viewport(bytes: &[u8], width: u32, height: u32) -> Result<RgbaImage> {
    if bytes.is_empty() {
        return Err(ProcessingError::Screenshot("no image data".to_string()));
    }

    let screenshot = image::load_from_memory(bytes)?;

    if screenshot.width() >= width && screenshot.height() >= height {
        return Ok(screenshot.crop_imm(0, 0, width, height).to_rgba8());
    }

    let mut canvas = RgbaImage::new(width, height);
    imageops::overlay(&mut canvas, &screenshot.to_rgba8(), 0, 0);
    Ok(canvas)
}

/// Write as PNG, replacing any existing file
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_fn(width, height, |x, y| {
            if x < 10 && y < 10 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_crop_larger_screenshot() {
        let cropped = fit_to_viewport(&png_bytes(140, 90), 120, 80).unwrap();
        assert_eq!(cropped.dimensions(), (120, 80));
        assert_eq!(cropped.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(cropped.get_pixel(119, 79), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_exact_screenshot_unchanged() {
        let fitted = fit_to_viewport(&png_bytes(120, 80), 120, 80).unwrap();
        assert_eq!(fitted.dimensions(), (120, 80));
    }

    #[test]
    fn test_pad_smaller_screenshot() {
        let padded = fit_to_viewport(&png_bytes(100, 60), 120, 80).unwrap();
        assert_eq!(padded.dimensions(), (120, 80));
        assert_eq!(padded.get_pixel(50, 30), &Rgba([0, 0, 255, 255]));
        assert_eq!(padded.get_pixel(110, 70), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            fit_to_viewport(&[], 10, 10),
            Err(ProcessingError::Screenshot(_))
        ));
        assert!(matches!(
            fit_to_viewport(b"not a png", 10, 10),
            Err(ProcessingError::Image(_))
        ));
    }

    #[test]
    fn test_save_png_overwrites() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("map_of_001.png");

        save_png(&fit_to_viewport(&png_bytes(50, 50), 40, 30)?, &path)?;
        save_png(&fit_to_viewport(&png_bytes(50, 50), 40, 30)?, &path)?;

        let reloaded = image::open(&path)?;
        assert_eq!((reloaded.width(), reloaded.height()), (40, 30));
        Ok(())
    }
}
