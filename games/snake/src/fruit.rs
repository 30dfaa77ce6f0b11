use arcade_engine::{
    core::grid::random_cell, Board, Color, Dimensions, Entity, EntityId, GameObject, RenderBuffer,
    Rng, UpdateContext,
};
use glam::Vec2;

use crate::snake::TILE;

/// A single fruit. Passive: it only moves when eaten.
pub struct Fruit {
    entity: Entity,
}

impl Fruit {
    pub fn at(id: EntityId, pos: Vec2) -> Self {
        Self {
            entity: Entity::new(id, Dimensions::square(TILE))
                .with_tag("fruit")
                .with_pos(pos),
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.entity.pos
    }

    /// Jump to a random tile-aligned cell inside the board.
    pub fn relocate(&mut self, board: &Board, rng: &mut Rng) {
        self.entity.pos = random_cell(board, self.entity.size(), rng);
    }
}

impl GameObject for Fruit {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn update(&mut self, _ctx: &UpdateContext<'_>) {}

    fn draw(&self, surface: &mut RenderBuffer) {
        let size = self.entity.size();
        surface.fill_rect(
            self.entity.pos - Vec2::ONE,
            Dimensions::new(size.width - 2.0, size.height - 2.0),
            Color::Yellow,
        );
    }
}
