use crate::Side;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub dt: f32,  // Delta time for the last update
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Text shown above the court, e.g. `"3 : 1"`
    pub fn display(&self) -> String {
        format!("{} : {}", self.left, self.right)
    }
}

/// Which boundary test fired during an update. At most one fires per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    BottomWall,
    TopWall,
    /// Ball left through the right edge
    RightExit,
    /// Ball left through the left edge
    LeftExit,
    LeftPaddle,
    RightPaddle,
}

impl Contact {
    /// Wall and paddle contacts speed the ball up, exits reset it
    pub fn is_bounce(self) -> bool {
        !matches!(self, Contact::RightExit | Contact::LeftExit)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub contact: Option<Contact>,
    pub scored: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ball_hit_wall(&self) -> bool {
        matches!(self.contact, Some(Contact::TopWall | Contact::BottomWall))
    }

    pub fn ball_hit_paddle(&self) -> bool {
        matches!(self.contact, Some(Contact::LeftPaddle | Contact::RightPaddle))
    }
}
