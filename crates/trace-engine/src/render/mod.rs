pub mod compose;
pub mod frame;
pub mod layer;

// Re-export the composition entry point next to the types it fills
pub use compose::build_frame;
