use crate::api::config::ActivityConfig;
use crate::core::mask::GlyphMask;

/// Point-in-letter oracle gating all painting.
///
/// With a valid mask the answer is pixel-perfect. Without one the oracle
/// deliberately shrinks to a small centered rectangle: lacking pixel ground
/// truth, the activity must not reward painting everywhere.
pub struct Containment {
    width: f32,
    height: f32,
    fallback_width: f32,
    fallback_height: f32,
    mask: Option<GlyphMask>,
}

impl Containment {
    pub fn new(config: &ActivityConfig, mask: Option<GlyphMask>) -> Self {
        Self {
            width: config.canvas_width as f32,
            height: config.canvas_height as f32,
            fallback_width: config.fallback_width,
            fallback_height: config.fallback_height,
            mask,
        }
    }

    /// Whether a valid mask backs point queries.
    pub fn has_mask(&self) -> bool {
        self.mask.is_some()
    }

    /// The mask, for target sampling.
    pub fn mask(&self) -> Option<&GlyphMask> {
        self.mask.as_ref()
    }

    /// True iff (x, y) lies inside the letter's drawable region.
    pub fn is_drawable(&self, x: f32, y: f32) -> bool {
        if x < 0.0 || x >= self.width || y < 0.0 || y >= self.height {
            return false;
        }

        let Some(mask) = &self.mask else {
            // Restricted centered rectangle, inclusive edges
            let cx = self.width / 2.0;
            let cy = self.height / 2.0;
            return x >= cx - self.fallback_width / 2.0
                && x <= cx + self.fallback_width / 2.0
                && y >= cy - self.fallback_height / 2.0
                && y <= cy + self.fallback_height / 2.0;
        };

        let px = x.floor();
        let py = y.floor();
        if px < 0.0 || py < 0.0 || px >= mask.width() as f32 || py >= mask.height() as f32 {
            return false;
        }
        matches!(mask.alpha_at(px as u32, py as u32), Some(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_with_hole(hole: (u32, u32, u32, u32)) -> GlyphMask {
        let (hx, hy, hw, hh) = hole;
        let mut alpha = vec![255u8; 360 * 640];
        for y in hy..(hy + hh).min(640) {
            for x in hx..(hx + hw).min(360) {
                alpha[(y * 360 + x) as usize] = 0;
            }
        }
        GlyphMask::from_alpha(360, 640, alpha).unwrap()
    }

    #[test]
    fn outside_canvas_is_never_drawable() {
        let config = ActivityConfig::default();
        let oracle = Containment::new(&config, Some(mask_with_hole((0, 0, 360, 640))));
        assert!(!oracle.is_drawable(-1.0, 10.0));
        assert!(!oracle.is_drawable(10.0, -0.5));
        assert!(!oracle.is_drawable(360.0, 10.0));
        assert!(!oracle.is_drawable(10.0, 640.0));
    }

    #[test]
    fn mask_answers_pixel_perfect() {
        let config = ActivityConfig::default();
        let oracle = Containment::new(&config, Some(mask_with_hole((100, 100, 10, 10))));
        assert!(oracle.is_drawable(100.0, 100.0));
        assert!(oracle.is_drawable(109.9, 109.9)); // floors to (109, 109)
        assert!(!oracle.is_drawable(110.0, 100.0));
        assert!(!oracle.is_drawable(99.9, 100.0)); // floors to (99, 100)
    }

    #[test]
    fn no_mask_shrinks_to_center_rectangle() {
        let config = ActivityConfig::default();
        let oracle = Containment::new(&config, None);
        assert!(oracle.is_drawable(180.0, 320.0)); // canvas center
        assert!(!oracle.is_drawable(10.0, 10.0));
        // Inclusive rectangle edges: x in [140, 220], y in [260, 380]
        assert!(oracle.is_drawable(140.0, 260.0));
        assert!(oracle.is_drawable(220.0, 380.0));
        assert!(!oracle.is_drawable(139.9, 320.0));
        assert!(!oracle.is_drawable(180.0, 380.1));
    }
}
