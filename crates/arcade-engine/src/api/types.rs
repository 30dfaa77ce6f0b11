use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// A game event communicated from Rust to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: u32, a: f32, b: f32, c: f32) -> Self {
        Self {
            kind: kind as f32,
            a,
            b,
            c,
        }
    }
}

/// Lifecycle phase of a running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Running,
    Paused,
    GameOver,
}

impl GamePhase {
    /// Only a running game advances its world. Every other phase is draw-only.
    pub fn updates_world(self) -> bool {
        matches!(self, GamePhase::Running)
    }

    /// Numeric code written into the shared header.
    pub fn code(self) -> u32 {
        match self {
            GamePhase::Menu => 0,
            GamePhase::Running => 1,
            GamePhase::Paused => 2,
            GamePhase::GameOver => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_running_updates() {
        assert!(GamePhase::Running.updates_world());
        assert!(!GamePhase::Menu.updates_world());
        assert!(!GamePhase::Paused.updates_world());
        assert!(!GamePhase::GameOver.updates_world());
    }

    #[test]
    fn event_is_four_floats() {
        let ev = GameEvent::new(2, 1.0, 2.0, 3.0);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&ev));
        assert_eq!(floats.len(), GameEvent::FLOATS);
        assert_eq!(floats, &[2.0, 1.0, 2.0, 3.0]);
    }
}
