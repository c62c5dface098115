pub mod api;
pub mod core;
pub mod input;
pub mod assets;
pub mod render;
pub mod runner;

// Re-export key types at crate root for convenience
pub use api::config::{ActivityConfig, ALPHABET_LEN};
pub use api::types::{ActivityEvent, SoundEvent};
pub use assets::manifest::{AssetManifest, LetterAssets};
pub use assets::provider::{AssetProvider, GlyphImage};
pub use assets::AssetError;
pub use core::clock::FrameClock;
pub use core::containment::Containment;
pub use core::mask::GlyphMask;
pub use core::rng::Rng;
pub use core::sampler::TargetPixels;
pub use core::session::Session;
pub use core::tracer::PointerTracer;
pub use core::transition::{Phase, Transition, TransitionTick};
pub use input::queue::{InputEvent, InputQueue};
pub use render::frame::{BrushMark, Frame};
pub use render::layer::RenderLayer;
pub use runner::ActivityRunner;
