use std::collections::HashMap;
use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{AtlasId, SpriteComponent};

/// Registry of named sprite sheets, built from an AssetManifest.
/// Provides name-based lookup for game code.
#[derive(Debug, Clone, Default)]
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteComponent>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        for name in manifest.dangling_sprites() {
            log::warn!("sprite `{}` references a missing atlas", name);
        }
        let sprites = manifest
            .sprites
            .iter()
            .map(|(name, desc)| {
                let sprite = SpriteComponent {
                    atlas: AtlasId(desc.atlas),
                    col: desc.col as f32,
                    row: desc.row as f32,
                    cell_span: desc.span as f32,
                };
                (name.clone(), sprite)
            })
            .collect();
        Self { sprites }
    }

    /// Look up a sprite by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&SpriteComponent> {
        self.sprites.get(name)
    }

    /// Look up a sprite that must have been loaded before drawing starts.
    ///
    /// Panics if the sprite is unknown: drawing before assets are loaded is a
    /// caller bug.
    pub fn require(&self, name: &str) -> &SpriteComponent {
        match self.sprites.get(name) {
            Some(sprite) => sprite,
            None => panic!("sprite `{}` is not loaded", name),
        }
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
