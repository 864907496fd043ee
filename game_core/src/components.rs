use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which half of the court something belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Paddle - a player's bat, positioned by its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2) -> Self {
        Self { side, pos }
    }

    /// True when `y` lies strictly inside the paddle's vertical span
    pub fn spans(&self, y: f32, height: f32) -> bool {
        let half_height = height / 2.0;
        y > self.pos.y - half_height && y < self.pos.y + half_height
    }
}

/// Ball - the pong ball, positioned by its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }
}

/// Key state for one paddle this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }

    /// -1 = up, 0 = stop, 1 = down. Down wins when both keys are held.
    pub fn direction(&self) -> i8 {
        let mut dir = 0;
        if self.up {
            dir = -1;
        }
        if self.down {
            dir = 1;
        }
        dir
    }
}

/// Input for both paddles, gathered once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub left: PaddleInput,
    pub right: PaddleInput,
}

impl FrameInput {
    pub fn get(&self, side: Side) -> PaddleInput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}
