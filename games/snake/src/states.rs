use arcade_engine::{BehaviorState, Dimensions, Entity, InputState, Key};
use glam::Vec2;

/// Direction the snake is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
    Up,
    Down,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Right, Heading::Left, Heading::Down, Heading::Up];

    fn is_horizontal(self) -> bool {
        matches!(self, Heading::Left | Heading::Right)
    }
}

/// One heading state. Left/right may only turn up or down and vice versa,
/// so the snake can never reverse into itself.
#[derive(Debug, Clone)]
pub struct SnakeState {
    heading: Heading,
}

impl SnakeState {
    pub fn new(heading: Heading) -> Self {
        Self { heading }
    }

    /// One tile along this state's axis.
    pub fn step(&self, tile: Dimensions) -> Vec2 {
        match self.heading {
            Heading::Left => Vec2::new(-tile.width, 0.0),
            Heading::Right => Vec2::new(tile.width, 0.0),
            Heading::Up => Vec2::new(0.0, -tile.height),
            Heading::Down => Vec2::new(0.0, tile.height),
        }
    }
}

impl BehaviorState for SnakeState {
    type Owner = Entity;
    type Kind = Heading;

    fn kind(&self) -> Heading {
        self.heading
    }

    fn handle_input(&mut self, _head: &Entity, input: &InputState) -> Option<Heading> {
        let latest = input.last_pressed()?;
        let turn = match latest {
            Key::ArrowUp => Heading::Up,
            Key::ArrowDown => Heading::Down,
            Key::ArrowLeft => Heading::Left,
            Key::ArrowRight => Heading::Right,
            _ => return None,
        };
        // Same-axis keys are ignored
        if turn.is_horizontal() == self.heading.is_horizontal() {
            return None;
        }
        Some(turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_engine::EntityId;

    fn held(keys: &[Key]) -> InputState {
        let mut input = InputState::with_accepted_keys(&Key::ARROWS);
        for key in keys {
            input.press(*key);
        }
        input
    }

    fn head() -> Entity {
        Entity::new(EntityId(1), Dimensions::square(20.0))
    }

    #[test]
    fn horizontal_turns_only_vertically() {
        for heading in [Heading::Left, Heading::Right] {
            let mut state = SnakeState::new(heading);
            assert_eq!(state.handle_input(&head(), &held(&[Key::ArrowUp])), Some(Heading::Up));
            assert_eq!(state.handle_input(&head(), &held(&[Key::ArrowDown])), Some(Heading::Down));
            assert_eq!(state.handle_input(&head(), &held(&[Key::ArrowLeft])), None);
            assert_eq!(state.handle_input(&head(), &held(&[Key::ArrowRight])), None);
        }
    }

    #[test]
    fn vertical_turns_only_horizontally() {
        for heading in [Heading::Up, Heading::Down] {
            let mut state = SnakeState::new(heading);
            assert_eq!(state.handle_input(&head(), &held(&[Key::ArrowLeft])), Some(Heading::Left));
            assert_eq!(state.handle_input(&head(), &held(&[Key::ArrowRight])), Some(Heading::Right));
            assert_eq!(state.handle_input(&head(), &held(&[Key::ArrowUp])), None);
            assert_eq!(state.handle_input(&head(), &held(&[Key::ArrowDown])), None);
        }
    }

    #[test]
    fn only_the_latest_key_counts() {
        let mut state = SnakeState::new(Heading::Right);
        // Up is still held but Left came later
        assert_eq!(state.handle_input(&head(), &held(&[Key::ArrowUp, Key::ArrowLeft])), None);
        assert_eq!(state.handle_input(&head(), &held(&[])), None);
    }

    #[test]
    fn steps_one_tile() {
        let tile = Dimensions::square(20.0);
        assert_eq!(SnakeState::new(Heading::Right).step(tile), Vec2::new(20.0, 0.0));
        assert_eq!(SnakeState::new(Heading::Up).step(tile), Vec2::new(0.0, -20.0));
    }
}
