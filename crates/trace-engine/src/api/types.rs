use bytemuck::{Pod, Zeroable};

/// A sound command emitted by the session.
/// The numeric value maps to a host-defined clip in the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    /// Stop the looping paint sound, if one is playing.
    pub const PAINT_LOOP_STOP: SoundEvent = SoundEvent(0);
    /// Start the looping paint sound. At most one loop plays at a time:
    /// the host stops any running loop before starting the new one.
    pub const PAINT_LOOP_START: SoundEvent = SoundEvent(1);
    /// Pronunciation clips start here; letter N maps to `LETTER_BASE + N`.
    pub const LETTER_BASE: u32 = 10;

    /// Pronunciation clip for a letter index.
    pub fn letter(index: usize) -> SoundEvent {
        SoundEvent(Self::LETTER_BASE + index as u32)
    }
}

/// An activity event communicated from the core to the host UI shell.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ActivityEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl ActivityEvent {
    pub const FLOATS: usize = 4;
}
