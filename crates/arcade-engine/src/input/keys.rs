/// Keys the engine knows how to track.
/// Names follow the browser's `KeyboardEvent.key` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Space,
    Shift,
}

impl Key {
    /// Map a browser key name to a `Key`. Letter keys match in either case.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "w" | "W" => Key::W,
            "a" | "A" => Key::A,
            "s" | "S" => Key::S,
            "d" | "D" => Key::D,
            " " => Key::Space,
            "Shift" => Key::Shift,
            _ => return None,
        };
        Some(key)
    }

    pub fn name(self) -> &'static str {
        match self {
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::W => "w",
            Key::A => "a",
            Key::S => "s",
            Key::D => "d",
            Key::Space => " ",
            Key::Shift => "Shift",
        }
    }

    pub const ARROWS: [Key; 4] = [Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight];
}

/// Input event types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key: Key },
    /// A key was released.
    KeyUp { key: Key },
    /// A custom event from the UI layer (menu buttons, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// The set of currently-held keys, filtered by an allow-list.
///
/// Held keys keep press order: the last element is the most recently pressed
/// key still held down.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: Vec<Key>,
    accepted: Vec<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: Vec::with_capacity(8),
            accepted: Vec::new(),
        }
    }

    pub fn with_accepted_keys(keys: &[Key]) -> Self {
        let mut state = Self::new();
        state.set_accepted_keys(keys);
        state
    }

    /// Replace the allow-list. Anything currently held is forgotten.
    pub fn set_accepted_keys(&mut self, keys: &[Key]) {
        self.held.clear();
        self.accepted = keys.to_vec();
    }

    pub fn accepts(&self, key: Key) -> bool {
        self.accepted.contains(&key)
    }

    /// Record a key press. Returns false if the key is not accepted.
    pub fn press(&mut self, key: Key) -> bool {
        if !self.accepts(key) {
            return false;
        }
        if !self.held.contains(&key) {
            self.held.push(key);
        }
        true
    }

    /// Record a key release. Returns false if the key is not accepted.
    pub fn release(&mut self, key: Key) -> bool {
        if !self.accepts(key) {
            return false;
        }
        self.held.retain(|k| *k != key);
        true
    }

    /// Apply a key event. Custom events are ignored here.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => {
                self.press(key);
            }
            InputEvent::KeyUp { key } => {
                self.release(key);
            }
            InputEvent::Custom { .. } => {}
        }
    }

    pub fn held(&self) -> &[Key] {
        &self.held
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn any_held(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.is_held(*k))
    }

    /// The most recently pressed key that is still held.
    pub fn last_pressed(&self) -> Option<Key> {
        self.held.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_browser_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_name(" "), Some(Key::Space));
        assert_eq!(Key::from_name("D"), Some(Key::D));
        assert_eq!(Key::from_name("Enter"), None);
        for key in Key::ARROWS {
            assert_eq!(Key::from_name(key.name()), Some(key));
        }
    }

    #[test]
    fn ignores_keys_outside_allow_list() {
        let mut input = InputState::with_accepted_keys(&Key::ARROWS);
        assert!(!input.press(Key::Space));
        assert!(input.is_empty());
        assert!(input.press(Key::ArrowUp));
        assert_eq!(input.held(), &[Key::ArrowUp]);
    }

    #[test]
    fn keeps_press_order_without_duplicates() {
        let mut input = InputState::with_accepted_keys(&Key::ARROWS);
        input.press(Key::ArrowUp);
        input.press(Key::ArrowLeft);
        input.press(Key::ArrowUp);
        assert_eq!(input.held(), &[Key::ArrowUp, Key::ArrowLeft]);
        assert_eq!(input.last_pressed(), Some(Key::ArrowLeft));

        input.release(Key::ArrowLeft);
        assert_eq!(input.last_pressed(), Some(Key::ArrowUp));
    }

    #[test]
    fn changing_allow_list_clears_held() {
        let mut input = InputState::with_accepted_keys(&Key::ARROWS);
        input.apply(&InputEvent::KeyDown { key: Key::ArrowDown });
        assert!(input.is_held(Key::ArrowDown));

        input.set_accepted_keys(&[Key::Space]);
        assert!(input.is_empty());
        assert!(!input.accepts(Key::ArrowDown));
    }

    #[test]
    fn custom_events_do_not_touch_keys() {
        let mut input = InputState::with_accepted_keys(&Key::ARROWS);
        input.apply(&InputEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 });
        assert!(input.is_empty());
    }
}
