/// Number of letters in the alphabet the activity cycles through.
pub const ALPHABET_LEN: usize = 26;

/// Configuration for the tracing activity, provided by the host.
#[derive(Debug, Clone)]
pub struct ActivityConfig {
    /// Logical canvas width in pixels (default: 360).
    pub canvas_width: u32,
    /// Logical canvas height in pixels (default: 640).
    pub canvas_height: u32,
    /// Edge length of the pointer's bounding box in canvas units (default: 46).
    /// Half of this is the target-eviction reach around a paint point.
    pub pointer_size: f32,
    /// Upper bound on sampled completion targets per letter (default: 100).
    pub target_cap: usize,
    /// Remaining-target count below which a letter counts as complete
    /// (default: 5).
    pub completion_threshold: usize,
    /// Total letter-transition duration in milliseconds (default: 3200).
    pub transition_ms: u32,
    /// Length of one simulated frame in milliseconds (default: 16).
    pub step_ms: u32,
    /// Half-width of the containment tolerance window probed around a paint
    /// point (default: 2).
    pub paint_tolerance: i32,
    /// Paint events per full hue rotation of the brush color (default: 60).
    pub hue_cycle: u32,
    /// Random positions probed when validating an extracted mask
    /// (default: 100).
    pub mask_validation_samples: u32,
    /// Opacity of the glyph overlay layer (default: 0.4).
    pub glyph_overlay_alpha: f32,
    /// Rendered edge length of one brush mark in canvas units (default: 30).
    pub brush_size: f32,
    /// Width of the restricted containment rectangle used when no mask is
    /// available (default: 80).
    pub fallback_width: f32,
    /// Height of the restricted containment rectangle used when no mask is
    /// available (default: 120).
    pub fallback_height: f32,
    /// Number of letters the activity cycles through (default: 26).
    pub letter_count: usize,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            canvas_width: 360,
            canvas_height: 640,
            pointer_size: 46.0,
            target_cap: 100,
            completion_threshold: 5,
            transition_ms: 3200,
            step_ms: 16,
            paint_tolerance: 2,
            hue_cycle: 60,
            mask_validation_samples: 100,
            glyph_overlay_alpha: 0.4,
            brush_size: 30.0,
            fallback_width: 80.0,
            fallback_height: 120.0,
            letter_count: ALPHABET_LEN,
        }
    }
}
