use crate::{Ball, Config, Contact, Paddle, Side};
use glam::Vec2;

/// Check the ball against walls, exits and paddles in priority order.
///
/// Only the first matching test fires. Bounces are applied to the ball here;
/// exits are only reported, the caller awards the point and resets.
pub fn check_contacts(ball: &mut Ball, paddles: &[Paddle; 2], config: &Config) -> Option<Contact> {
    let contact = find_contact(ball, paddles, config)?;

    let m = config.velocity_multiplier;
    let nudge = config.contact_nudge;
    match contact {
        Contact::BottomWall => bounce(ball, Vec2::new(m, -m), Vec2::new(0.0, -nudge), config),
        Contact::TopWall => bounce(ball, Vec2::new(m, -m), Vec2::new(0.0, nudge), config),
        Contact::LeftPaddle => bounce(ball, Vec2::new(-m, m), Vec2::new(nudge, 0.0), config),
        Contact::RightPaddle => bounce(ball, Vec2::new(-m, m), Vec2::new(-nudge, 0.0), config),
        Contact::RightExit | Contact::LeftExit => {}
    }

    Some(contact)
}

fn find_contact(ball: &Ball, paddles: &[Paddle; 2], config: &Config) -> Option<Contact> {
    let Vec2 { x: bx, y: by } = ball.pos;
    let reach = config.paddle_reach();
    let left = &paddles[Side::Left.index()];
    let right = &paddles[Side::Right.index()];

    if by > config.game_height {
        Some(Contact::BottomWall)
    } else if by < 0.0 {
        Some(Contact::TopWall)
    } else if bx > config.game_width {
        Some(Contact::RightExit)
    } else if bx < 0.0 {
        Some(Contact::LeftExit)
    } else if bx < reach && left.spans(by, config.paddle_height) {
        Some(Contact::LeftPaddle)
    } else if bx > config.game_width - reach && right.spans(by, config.paddle_height) {
        Some(Contact::RightPaddle)
    } else {
        None
    }
}

fn bounce(ball: &mut Ball, scale: Vec2, nudge: Vec2, config: &Config) {
    ball.vel *= scale;
    if let Some(max) = config.max_ball_speed {
        ball.vel = ball.vel.clamp_length_max(max);
    }
    ball.pos += nudge;
}
