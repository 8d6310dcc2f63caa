use glam::Vec2;

/// Movement keys recognised by the free-flight controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
    Ascend,
    Descend,
}

/// Per-frame input snapshot.
///
/// The host rebuilds this from its own event plumbing every tick and passes
/// it into [`crate::engine::core::NavEngine::tick`]; nothing in the core
/// registers ambient listeners or keeps key state across frames.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    movement: Vec<MoveKey>,
    /// Speed-boost modifier held this frame.
    pub boost: bool,
    /// Accumulated pointer motion since the previous frame, used for
    /// free-look rotation.
    pub look_delta: Vec2,
    /// Pointer position in viewport pixels, used as the pick crosshair.
    pub pointer: Vec2,
    /// Primary click happened this frame.
    pub clicked: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(mut self, key: MoveKey) -> Self {
        if !self.movement.contains(&key) {
            self.movement.push(key);
        }
        self
    }

    pub fn with_boost(mut self) -> Self {
        self.boost = true;
        self
    }

    pub fn with_look_delta(mut self, delta: Vec2) -> Self {
        self.look_delta = delta;
        self
    }

    pub fn with_pointer(mut self, pointer: Vec2) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn with_click(mut self) -> Self {
        self.clicked = true;
        self
    }

    pub fn is_pressed(&self, key: MoveKey) -> bool {
        self.movement.contains(&key)
    }

    pub fn any_movement(&self) -> bool {
        !self.movement.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressing_a_key_twice_records_it_once() {
        let input = InputState::new()
            .press(MoveKey::Forward)
            .press(MoveKey::Forward);
        assert!(input.is_pressed(MoveKey::Forward));
        assert_eq!(input.movement.len(), 1);
    }

    #[test]
    fn default_state_has_no_signals() {
        let input = InputState::new();
        assert!(!input.any_movement());
        assert!(!input.boost);
        assert!(!input.clicked);
        assert_eq!(input.look_delta, Vec2::ZERO);
    }
}
