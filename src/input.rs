/// Logical key set sampled every frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Up,
    Left,
    Down,
    Right,
    Jump,
}

impl Key {
    /// Movement keys in the order the double-press scan visits them.
    pub const MOVEMENT: [Key; 4] = [Key::Up, Key::Left, Key::Down, Key::Right];

    const fn index(self) -> usize {
        match self {
            Key::Up => 0,
            Key::Left => 1,
            Key::Down => 2,
            Key::Right => 3,
            Key::Jump => 4,
        }
    }
}

/// One frame's worth of keyboard state, snapshotted before the update so the
/// detector and the world see the same picture.
#[derive(Clone, Copy, Default)]
pub struct FrameInput {
    now_ms: u32,
    held: [bool; 5],
    pressed: [bool; 5],
}

impl FrameInput {
    pub fn new(now_ms: u32) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    pub fn now_ms(&self) -> u32 {
        self.now_ms
    }

    pub fn held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Edge-triggered: true only on the frame the key went down.
    pub fn pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    pub fn set_held(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn set_pressed(&mut self, key: Key) {
        self.pressed[key.index()] = true;
    }
}

/// Tracks the most recent fresh movement-key press so that two presses of the
/// same key within the window read as one dash gesture.
pub struct DoublePress {
    key: Option<Key>,
    pressed_at_ms: u32,
}

impl DoublePress {
    pub const WINDOW_MS: u32 = 300;

    pub fn new() -> Self {
        Self {
            key: None,
            pressed_at_ms: 0,
        }
    }

    /// Every fresh press replaces the tracked key and timestamp, including
    /// the press that completes a gesture, so a third press is measured
    /// against the second one, not the first.
    pub fn detect(&mut self, input: &FrameInput) -> Option<Key> {
        let mut double_pressed = None;

        for key in Key::MOVEMENT {
            if input.pressed(key) {
                if self.key == Some(key) && input.now_ms() - self.pressed_at_ms < Self::WINDOW_MS {
                    double_pressed = Some(key);
                }
                self.key = Some(key);
                self.pressed_at_ms = input.now_ms();
            }
        }

        double_pressed
    }
}
