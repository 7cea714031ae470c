use std::path::Path;

use anyhow::Context;
use image::RgbaImage;

/// The decoded image a display is showing. Owned by the host; the core only
/// borrows it per operation.
pub trait Bitmap {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Packed ARGB sample, `None` when out of range or unreadable. A failed
    /// sample degrades the readout to coordinates without a color part.
    fn sample(&self, x: u32, y: u32) -> Option<u32>;
}

/// Raster formats the readout recognizes by file extension.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Case-insensitive extension probe used before attempting a decode.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// A bitmap decoded from a file, backing the `Bitmap` capability for hosts
/// that have no decoded buffer of their own.
pub struct DecodedBitmap {
    pixels: RgbaImage,
}

impl DecodedBitmap {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }
}

impl Bitmap for DecodedBitmap {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn sample(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.pixels.width() || y >= self.pixels.height() {
            return None;
        }
        let [r, g, b, a] = self.pixels.get_pixel(x, y).0;
        Some(u32::from_be_bytes([a, r, g, b]))
    }
}

/// Decode an image file into a sampleable bitmap.
pub fn decode_file(path: &Path) -> anyhow::Result<DecodedBitmap> {
    let decoded = image::open(path)
        .with_context(|| format!("failed to decode image {}", path.display()))?;
    Ok(DecodedBitmap::from_rgba(decoded.to_rgba8()))
}
