use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// One stamped brush mark on the strokes layer.
/// Flat 6-float struct so a host renderer can read marks straight out of
/// shared memory.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BrushMark {
    /// X position in canvas space.
    pub x: f32,
    /// Y position in canvas space.
    pub y: f32,
    /// Stamp rotation in radians.
    pub rotation: f32,
    /// Rendered edge length in canvas units.
    pub size: f32,
    /// Hue rotation in degrees for the rainbow cycle.
    pub hue: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl BrushMark {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-frame composition state the host renderer reads.
///
/// Layers composite back-to-front in `RenderLayer` order. The glyph overlay
/// always draws at the configured 40% opacity while the activity runs, so
/// revealed strokes stay visible underneath the letter shape.
pub struct Frame {
    /// Every brush mark stamped since the letter loaded.
    marks: Vec<BrushMark>,
    /// Letter index whose glyph the overlay shows.
    pub glyph_letter: usize,
    /// Glyph overlay opacity (0 when no glyph is shown).
    pub glyph_alpha: f32,
    /// White fade overlay opacity (0 outside the second transition half).
    pub fade_alpha: f32,
    /// Pointer position; the pointer image draws centered on it.
    pub pointer: Vec2,
    /// Whether the pointer layer should draw at all.
    pub pointer_visible: bool,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            marks: Vec::with_capacity(512),
            glyph_letter: 0,
            glyph_alpha: 0.0,
            fade_alpha: 0.0,
            pointer: Vec2::ZERO,
            pointer_visible: false,
        }
    }

    pub fn clear(&mut self) {
        self.marks.clear();
        self.glyph_letter = 0;
        self.glyph_alpha = 0.0;
        self.fade_alpha = 0.0;
        self.pointer = Vec2::ZERO;
        self.pointer_visible = false;
    }

    pub fn push_mark(&mut self, mark: BrushMark) {
        self.marks.push(mark);
    }

    pub fn marks(&self) -> &[BrushMark] {
        &self.marks
    }

    pub fn mark_count(&self) -> u32 {
        self.marks.len() as u32
    }

    /// Raw pointer to mark data for shared-memory reads.
    pub fn marks_ptr(&self) -> *const f32 {
        self.marks.as_ptr() as *const f32
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brush_mark_is_6_floats() {
        assert_eq!(std::mem::size_of::<BrushMark>(), 24);
        assert_eq!(BrushMark::FLOATS, 6);
    }

    #[test]
    fn frame_push_and_count() {
        let mut frame = Frame::new();
        frame.push_mark(BrushMark::default());
        frame.push_mark(BrushMark::default());
        assert_eq!(frame.mark_count(), 2);
        frame.clear();
        assert_eq!(frame.mark_count(), 0);
    }
}
