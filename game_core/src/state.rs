//! Owned game state and the per-frame update

use crate::systems::*;
use crate::text::{MonospaceMetrics, ScoreText, TextMetrics};
use crate::{Ball, Config, Contact, Events, FrameInput, Paddle, Score, Side, Time};
use glam::Vec2;

/// Everything the game mutates, created once and reset in place
pub struct GameState {
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub score: Score,
    /// Set after the left player concedes; the next serve heads left
    pub player1_serving: bool,
    pub score_text: ScoreText,
    pub time: Time,
    metrics: Box<dyn TextMetrics>,
}

impl GameState {
    /// Create the initial state using a monospace text estimate
    pub fn new(config: &Config) -> Self {
        Self::with_metrics(config, Box::new(MonospaceMetrics::default()))
    }

    pub fn with_metrics(config: &Config, metrics: Box<dyn TextMetrics>) -> Self {
        let mut state = Self {
            paddles: [
                Paddle::new(Side::Left, Vec2::ZERO),
                Paddle::new(Side::Right, Vec2::ZERO),
            ],
            ball: Ball::new(Vec2::ZERO, Vec2::ZERO),
            score: Score::new(),
            player1_serving: false,
            score_text: ScoreText::default(),
            time: Time::default(),
            metrics,
        };
        state.reset(config);
        state
    }

    /// Swap the text measurer, e.g. once a font is loaded, and re-center
    pub fn set_metrics(&mut self, metrics: Box<dyn TextMetrics>, config: &Config) {
        self.metrics = metrics;
        self.refresh_score_text(config);
    }

    /// Put paddles and ball back at their start positions and serve
    pub fn reset(&mut self, config: &Config) {
        let mid_y = config.game_height / 2.0;
        for side in Side::BOTH {
            self.paddles[side.index()] = Paddle::new(side, Vec2::new(config.paddle_x(side), mid_y));
        }

        let vx = if self.player1_serving {
            -config.initial_velocity_x
        } else {
            config.initial_velocity_x
        };
        self.ball = Ball::new(
            Vec2::new(config.game_width / 2.0, mid_y),
            Vec2::new(vx, config.initial_velocity_y),
        );

        self.refresh_score_text(config);
        log::debug!(
            "Reset, serving {}",
            if self.player1_serving { "left" } else { "right" }
        );
    }

    fn refresh_score_text(&mut self, config: &Config) {
        self.score_text.refresh(
            self.score.display(),
            config.score_text_size,
            config.game_width,
            self.metrics.as_ref(),
        );
    }

    /// Advance one frame: move paddles, move the ball, then resolve at most
    /// one contact.
    pub fn update(&mut self, input: &FrameInput, dt: f32, config: &Config) -> Events {
        let mut events = Events::new();
        self.time.advance(dt);

        let dirs = paddle_directions(input, &self.ball, &self.paddles, config);
        move_paddles(&mut self.paddles, dirs, dt, config);

        if !config.stage.ball_moves() {
            return events;
        }
        move_ball(&mut self.ball, dt);

        let contact = check_contacts(&mut self.ball, &self.paddles, config);
        events.contact = contact;
        match contact {
            Some(exit @ (Contact::RightExit | Contact::LeftExit)) => {
                events.scored =
                    award_point(exit, &mut self.score, &mut self.player1_serving, config);
                self.reset(config);
            }
            Some(bounce) => log::debug!("{bounce:?} at {:?}, velocity {:?}", self.ball.pos, self.ball.vel),
            None => {}
        }

        events
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("paddles", &self.paddles)
            .field("ball", &self.ball)
            .field("score", &self.score)
            .field("player1_serving", &self.player1_serving)
            .field("score_text", &self.score_text)
            .field("time", &self.time)
            .finish_non_exhaustive()
    }
}
