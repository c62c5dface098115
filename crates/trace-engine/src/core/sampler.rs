use glam::Vec2;

use crate::core::mask::GlyphMask;
use crate::core::rng::Rng;

// Fallback sample rectangle used when no drawable pixel is known: a
// heuristic "safe interior" estimate around the canvas center.
const FALLBACK_X: u32 = 80;
const FALLBACK_W: u32 = 200;
const FALLBACK_Y: u32 = 170;
const FALLBACK_H: u32 = 300;
const FALLBACK_COUNT: usize = 100;

/// The sampled completion targets for the active letter.
///
/// Up to `cap` coordinates drawn with replacement from the drawable mask
/// area, so duplicates are possible. The set only shrinks: painting evicts
/// every target inside the pointer's bounding box. Regenerated on every
/// letter change.
pub struct TargetPixels {
    points: Vec<(u32, u32)>,
}

impl TargetPixels {
    /// An empty set, for sessions that have not loaded a letter yet.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Sample a fresh target set from `mask`, or synthesize fallback
    /// coordinates when no usable mask exists.
    pub fn sample(mask: Option<&GlyphMask>, cap: usize, rng: &mut Rng) -> Self {
        let candidates = match mask {
            Some(mask) => mask.drawable_coords(),
            None => Vec::new(),
        };

        if candidates.is_empty() {
            let mut points = Vec::with_capacity(FALLBACK_COUNT);
            for _ in 0..FALLBACK_COUNT {
                points.push((
                    rng.next_range(FALLBACK_X, FALLBACK_X + FALLBACK_W),
                    rng.next_range(FALLBACK_Y, FALLBACK_Y + FALLBACK_H),
                ));
            }
            return Self { points };
        }

        let count = cap.min(candidates.len());
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = rng.next_int(candidates.len() as u32) as usize;
            points.push(candidates[idx]);
        }
        Self { points }
    }

    #[cfg(test)]
    pub(crate) fn from_points(points: Vec<(u32, u32)>) -> Self {
        Self { points }
    }

    /// Number of targets still standing.
    pub fn remaining(&self) -> usize {
        self.points.len()
    }

    /// Remove every target inside the axis-aligned box of half-width
    /// `half_extent` around `center`, inclusive on both axes.
    /// Returns how many were evicted.
    pub fn evict_within(&mut self, center: Vec2, half_extent: f32) -> usize {
        let before = self.points.len();
        self.points.retain(|&(px, py)| {
            let dx = (px as f32 - center.x).abs();
            let dy = (py as f32 - center.y).abs();
            !(dx <= half_extent && dy <= half_extent)
        });
        before - self.points.len()
    }

    /// Iterate over the remaining targets.
    pub fn iter(&self) -> impl Iterator<Item = &(u32, u32)> {
        self.points.iter()
    }
}
