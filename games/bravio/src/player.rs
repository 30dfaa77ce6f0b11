use arcade_engine::{
    core::physics::{ground_level, is_on_ground},
    Color, Dimensions, DrawCommand, Entity, EntityId, Facing, GameObject, Kinematics,
    PhysicsTuning, RenderBuffer, SpriteAnimation, SpriteComponent, SpriteRegistry, StateMachine,
    Steering, UpdateContext,
};
use glam::Vec2;

use crate::states::{Avatar, Mode, PlayerState};

pub const PLAYER_SIZE: f32 = 32.0;

/// The platformer character.
pub struct Player {
    avatar: Avatar,
    states: StateMachine<PlayerState, SpriteAnimation>,
    /// Sheet of the current clip, resolved by `animate`.
    sprite: Option<SpriteComponent>,
}

impl Player {
    pub fn new(id: EntityId, pos: Vec2, tuning: PhysicsTuning, now_ms: f64) -> Self {
        Self {
            avatar: Avatar {
                entity: Entity::new(id, Dimensions::square(PLAYER_SIZE))
                    .with_tag("player")
                    .with_pos(pos),
                motion: Kinematics::default(),
                tuning,
                grounded: false,
            },
            states: StateMachine::new(PlayerState::all(), Mode::Idle, SpriteAnimation::new(now_ms)),
            sprite: None,
        }
    }

    #[cfg(test)]
    pub fn mode(&self) -> Mode {
        self.states.current_kind()
    }

    pub fn is_jumping(&self) -> bool {
        self.states.is(Mode::Jump)
    }

    #[cfg(test)]
    pub fn pos(&self) -> Vec2 {
        self.avatar.entity.pos
    }

    #[cfg(test)]
    pub fn velocity(&self) -> Vec2 {
        self.avatar.motion.velocity
    }

    pub fn facing(&self) -> Facing {
        self.avatar.motion.facing
    }

    pub fn frame_index(&self) -> usize {
        self.states.transient().frame_index
    }

    /// Advance the current clip by wall-clock time and resolve its sheet.
    ///
    /// Panics if the clip's sheet was never loaded.
    pub fn animate(&mut self, now_ms: f64, registry: &SpriteRegistry) {
        let clip = self.states.current().clip();
        self.states.transient_mut().advance(now_ms, &clip);
        self.sprite = Some(registry.require(clip.sprite).clone());
    }
}

impl GameObject for Player {
    fn entity(&self) -> &Entity {
        &self.avatar.entity
    }

    fn update(&mut self, ctx: &UpdateContext<'_>) {
        let ground = ground_level(ctx.ground, ctx.board);
        self.avatar.grounded = is_on_ground(&self.avatar.entity, ground);

        if let Some(input) = ctx.input {
            self.states.handle_input(&mut self.avatar, input);
        }

        let Avatar {
            entity,
            motion,
            tuning,
            ..
        } = &mut self.avatar;
        motion.step(entity, ground, tuning);
        if let Some(input) = ctx.input {
            motion.steer(Steering::from_input(input), tuning);
        }
    }

    fn draw(&self, surface: &mut RenderBuffer) {
        let entity = &self.avatar.entity;
        match &self.sprite {
            Some(sprite) => surface.push(DrawCommand::sprite(
                entity.pos,
                entity.size(),
                sprite,
                self.frame_index(),
                self.facing() == Facing::Left,
            )),
            None => surface.fill_rect(entity.pos, entity.size(), Color::Red),
        }
    }
}
