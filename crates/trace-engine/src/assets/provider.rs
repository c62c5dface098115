use crate::assets::AssetError;

/// A decoded RGBA8 image handed over by the host's asset loader.
///
/// Glyph images follow the opaque-stroke / transparent-interior convention:
/// the letter outline is opaque and the traceable interior is fully
/// transparent.
#[derive(Debug, Clone)]
pub struct GlyphImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl GlyphImage {
    /// Wrap a decoded RGBA8 buffer. The buffer must hold exactly
    /// `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, AssetError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(AssetError::PixelBufferSize {
                expected,
                found: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha channel value at (x, y), or None when out of range.
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4 + 3;
        self.rgba.get(idx).copied()
    }
}

/// Decoded assets the core reads directly.
///
/// Only glyph pixel data crosses into the core; audio clips, the brush, the
/// pointer and the background texture stay host-side and are referenced
/// through sound event codes and render layers. A missing glyph degrades to
/// bounds-only containment rather than failing the letter load.
pub trait AssetProvider {
    /// Decoded glyph image for a letter index, if the asset loaded.
    fn glyph_image(&self, letter: usize) -> Option<&GlyphImage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_buffer() {
        let result = GlyphImage::from_rgba(4, 4, vec![0; 10]);
        assert!(matches!(
            result,
            Err(AssetError::PixelBufferSize {
                expected: 64,
                found: 10
            })
        ));
    }

    #[test]
    fn alpha_reads_the_fourth_channel() {
        let mut rgba = vec![0u8; 2 * 2 * 4];
        rgba[3] = 255; // (0, 0)
        rgba[15] = 7; // (1, 1)
        let image = GlyphImage::from_rgba(2, 2, rgba).unwrap();
        assert_eq!(image.alpha_at(0, 0), Some(255));
        assert_eq!(image.alpha_at(1, 0), Some(0));
        assert_eq!(image.alpha_at(1, 1), Some(7));
        assert_eq!(image.alpha_at(2, 0), None);
    }
}
