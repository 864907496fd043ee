//! Keyboard input handling

use game_core::{FrameInput, PaddleInput};
use macroquad::input::{is_key_down, KeyCode};

/// Up/down keys for one paddle
#[derive(Debug, Clone, Copy)]
pub struct Controls {
    pub up: KeyCode,
    pub down: KeyCode,
}

pub const LEFT_CONTROLS: Controls = Controls {
    up: KeyCode::W,
    down: KeyCode::S,
};

pub const RIGHT_CONTROLS: Controls = Controls {
    up: KeyCode::Up,
    down: KeyCode::Down,
};

impl Controls {
    fn read(&self, is_down: &impl Fn(KeyCode) -> bool) -> PaddleInput {
        PaddleInput::new(is_down(self.up), is_down(self.down))
    }
}

/// Build this frame's input from a key-state query
pub fn frame_input(is_down: impl Fn(KeyCode) -> bool) -> FrameInput {
    FrameInput {
        left: LEFT_CONTROLS.read(&is_down),
        right: RIGHT_CONTROLS.read(&is_down),
    }
}

/// Poll the window's keyboard
pub fn read_frame_input() -> FrameInput {
    frame_input(is_key_down)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(keys: &[KeyCode]) -> impl Fn(KeyCode) -> bool + '_ {
        move |key| keys.contains(&key)
    }

    #[test]
    fn test_no_keys() {
        assert_eq!(frame_input(pressed(&[])), FrameInput::default());
    }

    #[test]
    fn test_left_paddle_keys() {
        let input = frame_input(pressed(&[KeyCode::W]));
        assert_eq!(input.left, PaddleInput::new(true, false));
        assert_eq!(input.right, PaddleInput::default());

        let input = frame_input(pressed(&[KeyCode::S]));
        assert_eq!(input.left.direction(), 1);
    }

    #[test]
    fn test_right_paddle_keys() {
        let input = frame_input(pressed(&[KeyCode::Up, KeyCode::Down]));
        assert_eq!(input.right, PaddleInput::new(true, true));
        assert_eq!(input.left, PaddleInput::default());
    }

    #[test]
    fn test_both_players_at_once() {
        let input = frame_input(pressed(&[KeyCode::W, KeyCode::Down]));
        assert_eq!(input.left.direction(), -1);
        assert_eq!(input.right.direction(), 1);
    }
}
