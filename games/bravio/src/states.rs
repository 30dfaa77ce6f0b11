use arcade_engine::{
    AnimationClip, BehaviorState, Entity, InputState, Key, Kinematics, PhysicsTuning, Steering,
};

const IDLE_CLIP: AnimationClip = AnimationClip::new("playerIdle", 4, 100.0);
const WALK_CLIP: AnimationClip = AnimationClip::new("playerWalk", 6, 100.0);
const RUN_CLIP: AnimationClip = AnimationClip::new("playerRun", 6, 100.0);
const JUMP_CLIP: AnimationClip = AnimationClip::new("playerJump", 4, 100.0);
const FALL_CLIP: AnimationClip = AnimationClip::new("playerJump", 8, 100.0);

const CLIPS: [AnimationClip; 5] = [IDLE_CLIP, WALK_CLIP, RUN_CLIP, JUMP_CLIP, FALL_CLIP];

/// The body the player states steer.
#[derive(Debug, Clone)]
pub struct Avatar {
    pub entity: Entity,
    pub motion: Kinematics,
    pub tuning: PhysicsTuning,
    /// Whether the feet rested on the ground at the start of this tick.
    pub grounded: bool,
}

impl Avatar {
    pub fn velocity_x(&self) -> f32 {
        self.motion.velocity.x
    }

    pub fn velocity_y(&self) -> f32 {
        self.motion.velocity.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Jump,
    Fall,
    Move,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerState {
    Idle,
    Jump,
    Fall,
    Move { sprinting: bool },
}

impl PlayerState {
    pub fn all() -> Vec<PlayerState> {
        vec![
            PlayerState::Idle,
            PlayerState::Jump,
            PlayerState::Fall,
            PlayerState::Move { sprinting: false },
        ]
    }

    /// Every sheet some state may draw with.
    pub fn sheets() -> impl Iterator<Item = &'static str> {
        CLIPS.into_iter().map(|clip| clip.sprite)
    }

    pub fn clip(&self) -> AnimationClip {
        match self {
            PlayerState::Idle => IDLE_CLIP,
            PlayerState::Jump => JUMP_CLIP,
            PlayerState::Fall => FALL_CLIP,
            PlayerState::Move { sprinting: true } => RUN_CLIP,
            PlayerState::Move { sprinting: false } => WALK_CLIP,
        }
    }
}

impl BehaviorState for PlayerState {
    type Owner = Avatar;
    type Kind = Mode;

    fn kind(&self) -> Mode {
        match self {
            PlayerState::Idle => Mode::Idle,
            PlayerState::Jump => Mode::Jump,
            PlayerState::Fall => Mode::Fall,
            PlayerState::Move { .. } => Mode::Move,
        }
    }

    fn enter(&mut self, avatar: &mut Avatar) {
        match self {
            PlayerState::Idle => avatar.motion.velocity.x = 0.0,
            PlayerState::Jump => avatar.motion.velocity.y = avatar.tuning.jump_velocity,
            PlayerState::Fall => {}
            PlayerState::Move { .. } => avatar.motion.nudge_forward(&avatar.tuning),
        }
    }

    fn handle_input(&mut self, avatar: &Avatar, input: &InputState) -> Option<Mode> {
        let rising = avatar.velocity_y() < 0.0;
        let jump = input.is_held(Key::Space);
        let horizontal = Steering::from_input(input).horizontal();

        match self {
            PlayerState::Idle => {
                if rising {
                    Some(Mode::Fall)
                } else if jump {
                    Some(Mode::Jump)
                } else if horizontal {
                    Some(Mode::Move)
                } else {
                    None
                }
            }
            PlayerState::Move { sprinting } => {
                *sprinting = input.is_held(Key::Shift);
                if rising {
                    Some(Mode::Fall)
                } else if jump {
                    Some(Mode::Jump)
                } else if !horizontal {
                    Some(Mode::Idle)
                } else {
                    None
                }
            }
            PlayerState::Jump => (avatar.velocity_y() >= 0.0).then_some(Mode::Fall),
            PlayerState::Fall => {
                if !avatar.grounded {
                    None
                } else if avatar.velocity_x() == 0.0 {
                    Some(Mode::Idle)
                } else {
                    Some(Mode::Move)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_engine::{Dimensions, EntityId};
    use glam::Vec2;

    const KEYS: [Key; 10] = [
        Key::ArrowUp,
        Key::ArrowDown,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
        Key::Space,
        Key::Shift,
    ];

    fn avatar(velocity: Vec2, grounded: bool) -> Avatar {
        Avatar {
            entity: Entity::new(EntityId(1), Dimensions::square(32.0)),
            motion: Kinematics {
                velocity,
                ..Default::default()
            },
            tuning: PhysicsTuning::default(),
            grounded,
        }
    }

    fn held(keys: &[Key]) -> InputState {
        let mut input = InputState::with_accepted_keys(&KEYS);
        for key in keys {
            input.press(*key);
        }
        input
    }

    #[test]
    fn idle_prefers_fall_then_jump_then_move() {
        let mut idle = PlayerState::Idle;
        let rising = avatar(Vec2::new(0.0, -1.0), false);
        let resting = avatar(Vec2::ZERO, true);

        assert_eq!(idle.handle_input(&rising, &held(&[Key::Space])), Some(Mode::Fall));
        assert_eq!(idle.handle_input(&resting, &held(&[Key::Space, Key::D])), Some(Mode::Jump));
        assert_eq!(idle.handle_input(&resting, &held(&[Key::A])), Some(Mode::Move));
        assert_eq!(idle.handle_input(&resting, &held(&[Key::ArrowUp])), None);
    }

    #[test]
    fn move_tracks_sprint_and_stops_without_direction() {
        let mut state = PlayerState::Move { sprinting: false };
        let resting = avatar(Vec2::new(2.0, 0.0), true);

        assert_eq!(state.handle_input(&resting, &held(&[Key::ArrowRight, Key::Shift])), None);
        assert_eq!(state.clip().sprite, "playerRun");

        assert_eq!(state.handle_input(&resting, &held(&[Key::ArrowRight])), None);
        assert_eq!(state.clip().sprite, "playerWalk");

        assert_eq!(state.handle_input(&resting, &held(&[])), Some(Mode::Idle));
        assert_eq!(state.handle_input(&resting, &held(&[Key::D, Key::Space])), Some(Mode::Jump));

        let rising = avatar(Vec2::new(2.0, -1.0), false);
        assert_eq!(state.handle_input(&rising, &held(&[Key::D, Key::Space])), Some(Mode::Fall));
    }

    #[test]
    fn jump_turns_into_fall_at_apex() {
        let mut state = PlayerState::Jump;
        assert_eq!(state.handle_input(&avatar(Vec2::new(0.0, -0.5), false), &held(&[])), None);
        assert_eq!(state.handle_input(&avatar(Vec2::ZERO, false), &held(&[])), Some(Mode::Fall));
    }

    #[test]
    fn fall_lands_into_idle_or_move() {
        let mut state = PlayerState::Fall;
        assert_eq!(state.handle_input(&avatar(Vec2::new(0.0, 3.0), false), &held(&[])), None);
        assert_eq!(state.handle_input(&avatar(Vec2::ZERO, true), &held(&[])), Some(Mode::Idle));
        assert_eq!(state.handle_input(&avatar(Vec2::new(1.5, 0.0), true), &held(&[])), Some(Mode::Move));
    }

    #[test]
    fn enter_hooks_set_velocity() {
        let mut a = avatar(Vec2::new(3.0, 0.0), true);
        PlayerState::Jump.enter(&mut a);
        assert_eq!(a.velocity_y(), -10.0);

        PlayerState::Move { sprinting: false }.enter(&mut a);
        assert!((a.velocity_x() - 3.3).abs() < 1e-6);

        PlayerState::Idle.enter(&mut a);
        assert_eq!(a.velocity_x(), 0.0);
    }

    #[test]
    fn clips_match_sheets() {
        assert_eq!(PlayerState::Idle.clip().frame_count, 4);
        assert_eq!(PlayerState::Jump.clip().frame_count, 4);
        assert_eq!(PlayerState::Fall.clip().frame_count, 8);
        assert_eq!(PlayerState::Fall.clip().sprite, "playerJump");

        let mut sheets: Vec<&str> = PlayerState::sheets().collect();
        sheets.sort_unstable();
        sheets.dedup();
        assert_eq!(sheets, vec!["playerIdle", "playerJump", "playerRun", "playerWalk"]);
    }
}
