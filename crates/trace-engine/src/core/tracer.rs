use glam::Vec2;

use crate::api::config::ActivityConfig;
use crate::core::containment::Containment;
use crate::core::sampler::TargetPixels;
use crate::render::frame::BrushMark;

/// Consumes pointer samples, gates them through the containment oracle,
/// stamps brush marks and evicts nearby completion targets.
pub struct PointerTracer {
    pos: Vec2,
    down: bool,
    /// Paint-event counter driving the hue cycle. The hue wraps every
    /// `hue_cycle` paints; the counter itself keeps climbing.
    count: u32,
}

impl PointerTracer {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            down: false,
            count: 0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn paint_count(&self) -> u32 {
        self.count
    }

    /// Pointer pressed: record the position and paint once at it.
    pub fn pointer_down(
        &mut self,
        pos: Vec2,
        config: &ActivityConfig,
        oracle: &Containment,
        targets: &mut TargetPixels,
    ) -> Option<BrushMark> {
        self.pos = pos;
        self.down = true;
        self.paint(pos, config, oracle, targets)
    }

    /// Pointer dragged: paint at the new position while down.
    pub fn pointer_move(
        &mut self,
        pos: Vec2,
        config: &ActivityConfig,
        oracle: &Containment,
        targets: &mut TargetPixels,
    ) -> Option<BrushMark> {
        self.pos = pos;
        if self.down {
            self.paint(pos, config, oracle, targets)
        } else {
            None
        }
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.down = false;
    }

    /// One gated paint attempt. Returns the brush mark to stamp, or None
    /// when containment rejects the position. A rejected paint changes
    /// nothing: no eviction, no counter advance.
    pub fn paint(
        &mut self,
        pos: Vec2,
        config: &ActivityConfig,
        oracle: &Containment,
        targets: &mut TargetPixels,
    ) -> Option<BrushMark> {
        if !oracle.is_drawable(pos.x, pos.y) {
            return None;
        }

        // Flooring can land the exact position on a boundary pixel; require
        // a drawable point somewhere in the surrounding tolerance window.
        if !Self::tolerance_window_hit(pos, config.paint_tolerance, oracle) {
            return None;
        }

        let cycle = config.hue_cycle.max(1);
        let theta = std::f32::consts::TAU * (self.count % cycle) as f32 / cycle as f32;

        let mark = BrushMark {
            x: pos.x,
            y: pos.y,
            rotation: theta * 0.1,
            size: config.brush_size,
            hue: theta.to_degrees(),
            alpha: 1.0,
        };

        targets.evict_within(pos, config.pointer_size / 2.0);
        self.count += 1;
        Some(mark)
    }

    fn tolerance_window_hit(pos: Vec2, tolerance: i32, oracle: &Containment) -> bool {
        for dx in -tolerance..=tolerance {
            for dy in -tolerance..=tolerance {
                if oracle.is_drawable(pos.x + dx as f32, pos.y + dy as f32) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for PointerTracer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mask::GlyphMask;

    fn oracle_with_hole(hole: (u32, u32, u32, u32)) -> Containment {
        let (hx, hy, hw, hh) = hole;
        let mut alpha = vec![255u8; 360 * 640];
        for y in hy..(hy + hh).min(640) {
            for x in hx..(hx + hw).min(360) {
                alpha[(y * 360 + x) as usize] = 0;
            }
        }
        let mask = GlyphMask::from_alpha(360, 640, alpha).unwrap();
        Containment::new(&ActivityConfig::default(), Some(mask))
    }

    #[test]
    fn paint_inside_letter_stamps_and_evicts() {
        let config = ActivityConfig::default();
        let oracle = oracle_with_hole((80, 80, 100, 100));
        let mut targets = TargetPixels::from_points(vec![
            (100, 100),
            (110, 105),
            (300, 500), // far away, survives
        ]);
        let mut tracer = PointerTracer::new();

        let mark = tracer.paint(Vec2::new(105.0, 100.0), &config, &oracle, &mut targets);
        let mark = mark.expect("paint inside the letter must stamp");
        assert_eq!(mark.x, 105.0);
        assert_eq!(mark.size, config.brush_size);
        assert_eq!(targets.remaining(), 1);
        assert_eq!(tracer.paint_count(), 1);
    }

    #[test]
    fn paint_outside_letter_is_a_no_op() {
        let config = ActivityConfig::default();
        let oracle = oracle_with_hole((80, 80, 100, 100));
        let mut targets = TargetPixels::from_points(vec![(300, 500)]);
        let mut tracer = PointerTracer::new();

        let mark = tracer.paint(Vec2::new(300.0, 500.0), &config, &oracle, &mut targets);
        assert!(mark.is_none());
        assert_eq!(targets.remaining(), 1);
        assert_eq!(tracer.paint_count(), 0);
    }

    #[test]
    fn pointer_down_paints_once_moves_paint_while_down() {
        let config = ActivityConfig::default();
        let oracle = oracle_with_hole((80, 80, 200, 200));
        let mut targets = TargetPixels::from_points(vec![]);
        let mut tracer = PointerTracer::new();

        assert!(tracer
            .pointer_down(Vec2::new(100.0, 100.0), &config, &oracle, &mut targets)
            .is_some());
        assert!(tracer
            .pointer_move(Vec2::new(120.0, 100.0), &config, &oracle, &mut targets)
            .is_some());
        tracer.pointer_up();
        assert!(tracer
            .pointer_move(Vec2::new(130.0, 100.0), &config, &oracle, &mut targets)
            .is_none());
        assert_eq!(tracer.paint_count(), 2);
    }

    #[test]
    fn hue_cycles_once_per_sixty_paints() {
        let config = ActivityConfig::default();
        let oracle = oracle_with_hole((0, 0, 360, 640));
        let mut targets = TargetPixels::from_points(vec![]);
        let mut tracer = PointerTracer::new();

        let first = tracer
            .paint(Vec2::new(100.0, 100.0), &config, &oracle, &mut targets)
            .unwrap();
        for _ in 0..59 {
            tracer.paint(Vec2::new(100.0, 100.0), &config, &oracle, &mut targets);
        }
        let wrapped = tracer
            .paint(Vec2::new(100.0, 100.0), &config, &oracle, &mut targets)
            .unwrap();
        assert_eq!(first.hue, wrapped.hue);
        assert_eq!(tracer.paint_count(), 61);
    }

    #[test]
    fn paint_covering_ten_of_forty_targets_leaves_thirty() {
        let config = ActivityConfig::default();
        let oracle = oracle_with_hole((0, 0, 360, 640));
        let mut points = Vec::new();
        for i in 0..10u32 {
            points.push((100 + i, 100)); // inside the box around (105, 100)
        }
        for i in 0..30u32 {
            points.push((300, 400 + i)); // far away
        }
        let mut targets = TargetPixels::from_points(points);
        let mut tracer = PointerTracer::new();

        tracer
            .paint(Vec2::new(105.0, 100.0), &config, &oracle, &mut targets)
            .unwrap();
        assert_eq!(targets.remaining(), 30);
    }

    #[test]
    fn eviction_uses_the_pointer_half_extent() {
        let config = ActivityConfig::default();
        let oracle = oracle_with_hole((0, 0, 360, 640));
        // Just inside and just outside the 23-unit box around (100, 100)
        let mut targets = TargetPixels::from_points(vec![(123, 100), (124, 100)]);
        let mut tracer = PointerTracer::new();

        tracer.paint(Vec2::new(100.0, 100.0), &config, &oracle, &mut targets);
        let survivors: Vec<_> = targets.iter().copied().collect();
        assert_eq!(survivors, vec![(124, 100)]);
    }
}
