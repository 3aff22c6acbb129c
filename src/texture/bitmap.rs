use xxhash_rust::xxh3::xxh3_64;

use crate::foundation::error::{FolioError, FolioResult};

/// Fixed-size raster produced by the texture synthesizer.
///
/// Pixels are row-major premultiplied RGBA8. The content hash is computed once at construction
/// and is what generated materials are keyed by.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
    content_hash: u64,
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("content_hash", &format_args!("{:016x}", self.content_hash))
            .finish()
    }
}

impl Bitmap {
    /// Wrap premultiplied RGBA8 bytes.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> FolioResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if data.len() != expected {
            return Err(FolioError::validation(format!(
                "bitmap byte len {} does not match {width}x{height}",
                data.len()
            )));
        }
        let content_hash = xxh3_64(&data) ^ (u64::from(width) << 32 | u64::from(height));
        Ok(Self {
            width,
            height,
            data,
            content_hash,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Hash of dimensions and pixel content.
    pub fn content_hash(&self) -> u64 {
        self.content_hash
    }

    /// Premultiplied pixel at `(x, y)`; `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert to a straight-alpha image suitable for PNG encoding.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut out = self.data.clone();
        unpremultiply_rgba8_in_place(&mut out);
        // Length was validated at construction.
        image::RgbaImage::from_raw(self.width, self.height, out)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/bitmap.rs"]
mod tests;
