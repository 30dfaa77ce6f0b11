use crate::components::entity::Dimensions;

/// Closed interval along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

/// Playable rectangle shared by every entity of a game.
/// The HUD strip occupies `[0, hud_offset)` above the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub x: Span,
    pub y: Span,
}

impl Board {
    pub fn new(size: Dimensions, hud_offset: f32) -> Self {
        Self {
            x: Span::new(0.0, size.width),
            y: Span::new(hud_offset, size.height + hud_offset),
        }
    }

    /// The lower bound used as ground when nothing else supports an entity.
    pub fn floor(&self) -> f32 {
        self.y.max
    }
}
