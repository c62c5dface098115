pub mod manifest;
pub mod provider;

use thiserror::Error;

/// Errors surfaced by the asset layer.
///
/// These stop at the loading boundary: once the activity runs, a bad or
/// missing asset degrades the affected feature instead of failing a frame.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to parse asset manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("manifest must list exactly 26 letters, found {found}")]
    LetterCount { found: usize },

    #[error("pixel buffer holds {found} bytes, expected {expected}")]
    PixelBufferSize { expected: usize, found: usize },
}
