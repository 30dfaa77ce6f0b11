use arcade_engine::{Color, Dimensions, Entity, EntityId, GameObject, RenderBuffer, UpdateContext};
use glam::Vec2;

/// Static block the player can stand on.
pub struct Platform {
    entity: Entity,
}

impl Platform {
    pub fn new(id: EntityId, pos: Vec2, size: Dimensions) -> Self {
        Self {
            entity: Entity::new(id, size).with_tag("platform").with_pos(pos),
        }
    }
}

impl GameObject for Platform {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn update(&mut self, _ctx: &UpdateContext<'_>) {}

    fn draw(&self, surface: &mut RenderBuffer) {
        surface.fill_rect(self.entity.pos, self.entity.size(), Color::Blue);
    }
}
