/// Render layer: fixed back-to-front composition order for the host
/// renderer: the textured background first, then the accumulated brush
/// strokes, the semi-transparent glyph overlay, the fade-to-white overlay,
/// and the pointer on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    #[default]
    Background = 0,
    Strokes = 1,
    Glyph = 2,
    Fade = 3,
    Pointer = 4,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 5;

    /// Convert from a u8 value to a RenderLayer.
    /// Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Background),
            1 => Some(Self::Strokes),
            2 => Some(Self::Glyph),
            3 => Some(Self::Fade),
            4 => Some(Self::Pointer),
            _ => None,
        }
    }

    /// Convert to u8 for protocol serialization.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_back_to_front() {
        assert!(RenderLayer::Background < RenderLayer::Strokes);
        assert!(RenderLayer::Strokes < RenderLayer::Glyph);
        assert!(RenderLayer::Glyph < RenderLayer::Fade);
        assert!(RenderLayer::Fade < RenderLayer::Pointer);
    }

    #[test]
    fn round_trip_u8() {
        for val in 0..RenderLayer::COUNT as u8 {
            let layer = RenderLayer::from_u8(val).unwrap();
            assert_eq!(layer.as_u8(), val);
        }
        assert!(RenderLayer::from_u8(5).is_none());
    }
}
