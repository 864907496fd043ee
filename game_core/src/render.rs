//! Draw list for a frame. The client replays it against the window toolkit.

use crate::{Config, GameState};
use glam::Vec2;

/// A single draw submission
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Axis-aligned rectangle by top-left corner and size
    Rect { min: Vec2, size: Vec2 },
    Circle { center: Vec2, radius: f32 },
    /// Text with its top-left corner at `pos`
    Text { content: String, pos: Vec2, size: u16 },
}

/// Build this frame's draw list: left paddle, right paddle, ball, then the
/// score once the stage keeps one.
pub fn draw_list(state: &GameState, config: &Config) -> Vec<DrawCommand> {
    let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);
    let mut commands: Vec<DrawCommand> = state
        .paddles
        .iter()
        .map(|paddle| DrawCommand::Rect {
            min: paddle.pos - paddle_size / 2.0,
            size: paddle_size,
        })
        .collect();

    commands.push(DrawCommand::Circle {
        center: state.ball.pos,
        radius: config.ball_radius,
    });

    if config.stage.keeps_score() {
        let text = &state.score_text;
        commands.push(DrawCommand::Text {
            content: text.content.clone(),
            pos: Vec2::new(text.x, text.y),
            size: text.size,
        });
    }

    commands
}
