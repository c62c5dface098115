use serde::{Deserialize, Serialize};

use crate::api::config::ALPHABET_LEN;
use crate::assets::AssetError;

/// Asset manifest describing every file the activity needs.
/// Loaded from a JSON file by the host's asset loader; the core only checks
/// its shape so a truncated deployment fails at startup, not mid-activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Per-letter assets, ordered a-z. Must contain exactly 26 entries.
    pub letters: Vec<LetterAssets>,
    /// Looping pencil sound played while painting.
    pub paint_sound: String,
    /// Brush stamp image for stroke marks.
    pub brush: String,
    /// Pointer image drawn centered on the touch position.
    pub pointer: String,
    /// Textured background revealed by painting.
    pub background: String,
}

/// Assets for a single letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterAssets {
    /// Glyph image path (opaque strokes, transparent interior).
    pub glyph: String,
    /// Pronunciation clip path.
    pub sound: String,
}

impl AssetManifest {
    /// Parse and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let manifest: AssetManifest = serde_json::from_str(json)?;
        if manifest.letters.len() != ALPHABET_LEN {
            return Err(AssetError::LetterCount {
                found: manifest.letters.len(),
            });
        }
        Ok(manifest)
    }
}
