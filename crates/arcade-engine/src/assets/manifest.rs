use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing all atlases and named sprite sheets for a game.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// List of texture atlases.
    pub atlases: Vec<AtlasDescriptor>,
    /// Named sprite lookup: name → atlas index + cell coordinates of the first frame.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
}

/// Describes a single texture atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Human-readable name (e.g., "main_walk").
    pub name: String,
    /// Number of columns in the atlas grid.
    pub cols: u32,
    /// Number of rows in the atlas grid.
    pub rows: u32,
    /// Relative path to the PNG file (e.g., "main_Walk_6.png").
    pub path: String,
}

/// Describes a named sprite sheet within an atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    /// Column of the first frame.
    #[serde(default)]
    pub col: u32,
    /// Row in the atlas grid.
    #[serde(default)]
    pub row: u32,
    /// Number of cells one frame spans (default: 1).
    #[serde(default = "default_span")]
    pub span: u32,
}

/// Why a manifest was refused.
#[derive(Debug)]
pub enum ManifestError {
    /// The JSON did not match the manifest layout.
    Parse(serde_json::Error),
    /// A sheet the game draws with is not in the manifest.
    MissingSprite(String),
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Parse(e) => write!(f, "parse error: {}", e),
            ManifestError::MissingSprite(name) => write!(f, "sprite `{}` is missing", name),
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Parse(e) => Some(e),
            ManifestError::MissingSprite(_) => None,
        }
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(e: serde_json::Error) -> Self {
        ManifestError::Parse(e)
    }
}

fn default_span() -> u32 {
    1
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sprite names whose atlas index points past the atlas list.
    pub fn dangling_sprites(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .sprites
            .iter()
            .filter(|(_, desc)| desc.atlas as usize >= self.atlases.len())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}
