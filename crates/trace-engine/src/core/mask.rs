use crate::assets::provider::GlyphImage;
use crate::core::rng::Rng;

/// Per-pixel opacity mask extracted from a letter glyph image.
///
/// A pixel is drawable iff its alpha is exactly 0: glyph strokes are opaque,
/// the traceable interior is fully transparent. Immutable once extracted;
/// rebuilt whenever the active letter changes.
pub struct GlyphMask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl GlyphMask {
    /// Rasterize `image` at exactly `width` x `height` and keep the alpha
    /// channel.
    ///
    /// Returns None when the source is unreadable or when a probe of
    /// `validation_samples` random positions finds no fully transparent
    /// pixel (a malformed or fully opaque asset). Extraction never panics;
    /// every failure degrades to bounds-only containment at the caller.
    pub fn extract(
        image: &GlyphImage,
        width: u32,
        height: u32,
        validation_samples: u32,
        rng: &mut Rng,
    ) -> Option<Self> {
        if width == 0 || height == 0 || image.width() == 0 || image.height() == 0 {
            log::warn!("glyph image has a zero dimension, mask unusable");
            return None;
        }

        // Nearest-neighbor resample to canvas resolution, alpha channel only.
        let mut alpha = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            let sy = y * image.height() / height;
            for x in 0..width {
                let sx = x * image.width() / width;
                match image.alpha_at(sx, sy) {
                    Some(a) => alpha.push(a),
                    None => {
                        log::warn!("glyph pixel read failed at ({sx}, {sy}), mask unusable");
                        return None;
                    }
                }
            }
        }

        let mask = Self {
            width,
            height,
            alpha,
        };

        // Probe random positions; a glyph with no transparent interior has
        // nowhere to trace and must not back point queries.
        let mut transparent = 0u32;
        for _ in 0..validation_samples {
            let idx = rng.next_int(mask.alpha.len() as u32) as usize;
            if mask.alpha[idx] == 0 {
                transparent += 1;
            }
        }
        if transparent == 0 {
            log::warn!("no transparent pixel in {validation_samples} probes, mask unusable");
            return None;
        }

        Some(mask)
    }

    /// Build a mask directly from an alpha grid.
    /// Returns None when the grid does not hold `width * height` values.
    pub fn from_alpha(width: u32, height: u32, alpha: Vec<u8>) -> Option<Self> {
        if alpha.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            alpha,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha at an integer position, or None when out of range.
    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.alpha.get((y * self.width + x) as usize).copied()
    }

    /// Every drawable (fully transparent) coordinate, row-major.
    pub fn drawable_coords(&self) -> Vec<(u32, u32)> {
        let mut coords = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.alpha[(y * self.width + x) as usize] == 0 {
                    coords.push((x, y));
                }
            }
        }
        coords
    }
}
