use crate::components::entity::Entity;
use crate::core::board::Board;
use crate::input::keys::InputState;
use crate::renderer::command::RenderBuffer;

/// Read-only view of the world handed to an entity for one update.
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext<'a> {
    /// Board bounds of the owning game.
    pub board: &'a Board,
    /// Held keys for input-driven entities; `None` for passive ones.
    pub input: Option<&'a InputState>,
    /// Entity currently supporting this one, as settled on the previous tick.
    pub ground: Option<&'a Entity>,
}

impl<'a> UpdateContext<'a> {
    /// Context for an entity that ignores input and ground.
    pub fn passive(board: &'a Board) -> Self {
        Self {
            board,
            input: None,
            ground: None,
        }
    }

    pub fn with_input(mut self, input: &'a InputState) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_ground(mut self, ground: Option<&'a Entity>) -> Self {
        self.ground = ground;
        self
    }
}

/// A simulated object: positioned, sized, updated once per accepted tick and drawn.
pub trait GameObject {
    fn entity(&self) -> &Entity;

    fn update(&mut self, ctx: &UpdateContext<'_>);

    fn draw(&self, surface: &mut RenderBuffer);
}
