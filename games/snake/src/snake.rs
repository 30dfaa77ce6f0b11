use arcade_engine::{
    Color, Dimensions, Entity, EntityId, GameObject, GridBody, RenderBuffer, StateMachine,
    UpdateContext,
};
use glam::Vec2;

use crate::states::{Heading, SnakeState};

pub const TILE: f32 = 20.0;

/// Head entity plus its trailing body.
pub struct Snake {
    head: Entity,
    body: GridBody,
    states: StateMachine<SnakeState>,
}

impl Snake {
    /// Head at (80, 100) heading right, three tiles trailing to the left.
    pub fn new(id: EntityId) -> Self {
        Self::with_body(
            id,
            Vec2::new(TILE * 4.0, TILE * 5.0),
            [
                Vec2::new(TILE * 3.0, TILE * 5.0),
                Vec2::new(TILE * 2.0, TILE * 5.0),
                Vec2::new(TILE, TILE * 5.0),
            ],
            Heading::Right,
        )
    }

    pub fn with_body(
        id: EntityId,
        head: Vec2,
        tiles: impl IntoIterator<Item = Vec2>,
        heading: Heading,
    ) -> Self {
        let states = Heading::ALL.iter().map(|h| SnakeState::new(*h)).collect();
        Self {
            head: Entity::new(id, Dimensions::square(TILE))
                .with_tag("snake")
                .with_pos(head),
            body: GridBody::new(tiles),
            states: StateMachine::new(states, heading, ()),
        }
    }

    pub fn head(&self) -> Vec2 {
        self.head.pos
    }

    #[cfg(test)]
    pub fn body(&self) -> &GridBody {
        &self.body
    }

    #[cfg(test)]
    pub fn heading(&self) -> Heading {
        self.states.current_kind()
    }

    pub fn eat(&mut self) {
        self.body.eat();
    }

    pub fn is_dead(&self) -> bool {
        self.body.is_dead()
    }

    pub fn points(&self) -> u32 {
        (self.body.len().saturating_sub(3) * 10) as u32
    }
}

impl GameObject for Snake {
    fn entity(&self) -> &Entity {
        &self.head
    }

    fn update(&mut self, ctx: &UpdateContext<'_>) {
        if let Some(input) = ctx.input {
            self.states.handle_input(&mut self.head, input);
        }
        let step = self.states.current().step(self.head.size());
        self.body.advance(&mut self.head, step, ctx.board);
    }

    fn draw(&self, surface: &mut RenderBuffer) {
        let inset = Dimensions::square(TILE - 2.0);
        for tile in self.body.tiles() {
            surface.fill_rect(*tile + Vec2::ONE, inset, Color::Blue);
        }
        surface.fill_rect(self.head.pos, self.head.size(), Color::Red);
    }
}
