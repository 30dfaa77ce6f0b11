//! Platformer physics: per-tick gravity integration, landing, horizontal
//! steering and ground assignment.
//!
//! Units are world units per tick; y grows downward, so negative vertical
//! velocity means rising.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::components::entity::Entity;
use crate::core::board::Board;
use crate::input::keys::{InputState, Key};

/// Tolerance when deciding whether an entity rests on its ground.
const GROUND_EPSILON: f32 = 1e-3;

/// Physics constants for a platformer character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Added to vertical velocity every airborne tick.
    pub gravity: f32,
    /// Horizontal velocity change per tick while a direction is held.
    pub accelerator: f32,
    /// Horizontal speed cap when walking.
    pub walk_speed: f32,
    /// Horizontal speed cap while the run modifier is held.
    pub run_speed: f32,
    /// Vertical velocity set on take-off.
    pub jump_velocity: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            accelerator: 0.3,
            walk_speed: 5.0,
            run_speed: 7.0,
            jump_velocity: -10.0,
        }
    }
}

/// Horizontal facing, also used to mirror sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Horizontal intent read from held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Steering {
    pub left: bool,
    pub right: bool,
    pub run: bool,
}

impl Steering {
    pub fn from_input(input: &InputState) -> Self {
        Self {
            left: input.any_held(&[Key::ArrowLeft, Key::A]),
            right: input.any_held(&[Key::ArrowRight, Key::D]),
            run: input.is_held(Key::Shift),
        }
    }

    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }
}

/// Velocity and facing of a platformer character.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematics {
    pub velocity: Vec2,
    pub facing: Facing,
}

impl Kinematics {
    /// Integrate one tick and resolve against `ground` (a y coordinate).
    ///
    /// Position moves by the current velocity first. If the bottom edge projected
    /// one more tick ahead stays above the ground, gravity accumulates. Otherwise
    /// the entity lands: vertical velocity becomes 0 and its bottom edge is
    /// snapped onto the ground. Returns true on landing.
    pub fn step(&mut self, entity: &mut Entity, ground: f32, tuning: &PhysicsTuning) -> bool {
        entity.pos += self.velocity;

        if entity.bottom() + self.velocity.y < ground {
            self.velocity.y += tuning.gravity;
            false
        } else {
            self.velocity.y = 0.0;
            entity.set_bottom(ground);
            true
        }
    }

    /// Apply horizontal steering for one tick.
    ///
    /// Reversing direction drops horizontal velocity to zero before
    /// accelerating the other way. The speed cap depends on the run modifier as
    /// held this tick. With no direction held, velocity is left alone.
    pub fn steer(&mut self, steering: Steering, tuning: &PhysicsTuning) {
        if steering.left {
            if self.facing == Facing::Right {
                self.velocity.x = 0.0;
                self.facing = Facing::Left;
            }
            self.velocity.x -= tuning.accelerator;
        } else if steering.right {
            if self.facing == Facing::Left {
                self.velocity.x = 0.0;
                self.facing = Facing::Right;
            }
            self.velocity.x += tuning.accelerator;
        }

        let cap = if steering.run {
            tuning.run_speed
        } else {
            tuning.walk_speed
        };
        self.velocity.x = self.velocity.x.clamp(-cap, cap);
    }

    /// One accelerator step in the facing direction.
    pub fn nudge_forward(&mut self, tuning: &PhysicsTuning) {
        match self.facing {
            Facing::Left => self.velocity.x -= tuning.accelerator,
            Facing::Right => self.velocity.x += tuning.accelerator,
        }
    }
}

/// The y coordinate an entity falls towards: the top of its supporting
/// entity, or the board floor when nothing supports it.
pub fn ground_level(ground: Option<&Entity>, board: &Board) -> f32 {
    match ground {
        Some(support) => support.top(),
        None => board.floor(),
    }
}

/// Whether the entity's bottom edge sits on `ground`.
pub fn is_on_ground(entity: &Entity, ground: f32) -> bool {
    (entity.bottom() - ground).abs() <= GROUND_EPSILON
}

/// Whether `platform` can hold `player` up: spans overlap horizontally and the
/// player's feet are not below the platform's bottom edge.
pub fn supports(platform: &Entity, player: &Entity) -> bool {
    player.overlaps_horizontally(platform) && player.bottom() <= platform.bottom()
}

/// Pick the platform supporting `player` for the next tick.
///
/// A jumping player is never supported. Otherwise the first supporting
/// platform wins; `None` means the board floor.
pub fn find_ground<'a>(
    player: &Entity,
    jumping: bool,
    platforms: impl IntoIterator<Item = &'a Entity>,
) -> Option<usize> {
    if jumping {
        return None;
    }
    platforms
        .into_iter()
        .position(|platform| supports(platform, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::entity::Dimensions;

    fn board() -> Board {
        Board::new(Dimensions::new(500.0, 500.0), 40.0)
    }

    fn player_at(x: f32, y: f32) -> Entity {
        Entity::new(EntityId(1), Dimensions::square(32.0)).with_pos(Vec2::new(x, y))
    }

    fn platform() -> Entity {
        Entity::new(EntityId(2), Dimensions::new(150.0, 30.0)).with_pos(Vec2::new(250.0, 450.0))
    }

    #[test]
    fn airborne_entity_accumulates_gravity() {
        let tuning = PhysicsTuning::default();
        let mut player = player_at(100.0, 100.0);
        let mut motion = Kinematics::default();

        assert!(!motion.step(&mut player, 540.0, &tuning));
        assert_eq!(motion.velocity.y, 0.5);
        assert!(!motion.step(&mut player, 540.0, &tuning));
        assert_eq!(player.pos.y, 100.5);
        assert_eq!(motion.velocity.y, 1.0);
    }

    #[test]
    fn landing_snaps_to_ground_and_zeroes_velocity() {
        let tuning = PhysicsTuning::default();
        // bottom 530, moving 6 per tick: after integration bottom 536, projected 542 >= 540
        let mut player = player_at(100.0, 498.0);
        let mut motion = Kinematics {
            velocity: Vec2::new(0.0, 6.0),
            ..Default::default()
        };

        assert!(motion.step(&mut player, 540.0, &tuning));
        assert_eq!(player.bottom(), 540.0);
        assert_eq!(motion.velocity.y, 0.0);
    }

    #[test]
    fn resting_entity_stays_put() {
        let tuning = PhysicsTuning::default();
        let mut player = player_at(100.0, 508.0);
        let mut motion = Kinematics::default();
        for _ in 0..5 {
            assert!(motion.step(&mut player, 540.0, &tuning));
            assert_eq!(player.bottom(), 540.0);
            assert!(is_on_ground(&player, 540.0));
        }
    }

    #[test]
    fn take_off_is_not_a_landing() {
        let tuning = PhysicsTuning::default();
        let mut player = player_at(100.0, 508.0);
        let mut motion = Kinematics {
            velocity: Vec2::new(0.0, tuning.jump_velocity),
            ..Default::default()
        };
        assert!(!motion.step(&mut player, 540.0, &tuning));
        assert_eq!(player.pos.y, 498.0);
        assert_eq!(motion.velocity.y, -9.5);
    }

    #[test]
    fn reversing_zeroes_before_accelerating() {
        let tuning = PhysicsTuning::default();
        let mut motion = Kinematics {
            velocity: Vec2::new(4.0, 0.0),
            facing: Facing::Right,
        };
        motion.steer(Steering { left: true, ..Default::default() }, &tuning);
        assert_eq!(motion.velocity.x, -tuning.accelerator);
        assert_eq!(motion.facing, Facing::Left);
    }

    #[test]
    fn speed_is_capped_by_walk_or_run() {
        let tuning = PhysicsTuning::default();
        let mut motion = Kinematics::default();
        let walk = Steering { right: true, ..Default::default() };
        let run = Steering { right: true, run: true, ..Default::default() };

        for _ in 0..100 {
            motion.steer(run, &tuning);
        }
        assert_eq!(motion.velocity.x, tuning.run_speed);

        // Releasing the modifier clamps to walk speed on the very next tick
        motion.steer(walk, &tuning);
        assert_eq!(motion.velocity.x, tuning.walk_speed);
    }

    #[test]
    fn no_direction_keeps_velocity() {
        let tuning = PhysicsTuning::default();
        let mut motion = Kinematics {
            velocity: Vec2::new(3.0, 0.0),
            facing: Facing::Right,
        };
        motion.steer(Steering::default(), &tuning);
        assert_eq!(motion.velocity.x, 3.0);
    }

    #[test]
    fn ground_level_falls_back_to_floor() {
        let b = board();
        let p = platform();
        assert_eq!(ground_level(None, &b), 540.0);
        assert_eq!(ground_level(Some(&p), &b), 450.0);
    }

    #[test]
    fn platform_supports_overlapping_player_above_its_bottom() {
        let p = platform();
        assert!(supports(&p, &player_at(300.0, 400.0)));
        // Touching the left edge still counts
        assert!(supports(&p, &player_at(218.0, 400.0)));
        // Off to the side
        assert!(!supports(&p, &player_at(100.0, 400.0)));
        // Feet below the platform
        assert!(!supports(&p, &player_at(300.0, 508.0)));
    }

    #[test]
    fn find_ground_skips_jumping_player() {
        let platforms = [platform()];
        let player = player_at(300.0, 400.0);
        assert_eq!(find_ground(&player, false, platforms.iter()), Some(0));
        assert_eq!(find_ground(&player, true, platforms.iter()), None);
        assert_eq!(find_ground(&player_at(0.0, 400.0), false, platforms.iter()), None);
    }

    #[test]
    fn steering_reads_arrows_and_wasd() {
        let mut input = InputState::with_accepted_keys(&[Key::A, Key::ArrowRight, Key::Shift]);
        input.press(Key::A);
        input.press(Key::Shift);
        let s = Steering::from_input(&input);
        assert!(s.left && !s.right && s.run);
        assert!(s.horizontal());
    }

    #[test]
    fn tuning_overrides_fall_back_to_defaults() {
        let tuning: PhysicsTuning = serde_json::from_str(r#"{ "gravity": 0.8 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.8);
        assert_eq!(tuning.jump_velocity, -10.0);
        assert_eq!(tuning.run_speed, 7.0);
    }
}
