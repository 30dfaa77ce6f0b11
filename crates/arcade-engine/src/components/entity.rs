use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::api::types::EntityId;

/// Width and height of an entity in world units. Fixed for the entity's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// A positioned, sized unit of the simulation.
/// Position is the top-left corner; y grows downward.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Top-left corner in world space.
    pub pos: Vec2,
    size: Dimensions,
}

impl Entity {
    /// Create a new entity with the given ID and size at the origin.
    pub fn new(id: EntityId, size: Dimensions) -> Self {
        Self {
            id,
            tag: String::new(),
            pos: Vec2::ZERO,
            size,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn size(&self) -> Dimensions {
        self.size
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.width
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.height
    }

    /// Move the entity vertically so its bottom edge sits at `y`.
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.height;
    }

    /// Whether the horizontal spans touch or overlap (edges inclusive).
    pub fn overlaps_horizontally(&self, other: &Entity) -> bool {
        !(self.right() < other.left() || self.left() > other.right())
    }
}
