use crate::{Ball, Config, Paddle};

/// Apply paddle movement from per-paddle directions (-1, 0, 1)
pub fn move_paddles(paddles: &mut [Paddle; 2], dirs: [i8; 2], dt: f32, config: &Config) {
    for (paddle, dir) in paddles.iter_mut().zip(dirs) {
        if dir != 0 {
            let delta = dir as f32 * config.paddle_speed * dt;
            paddle.pos.y += delta;

            if config.clamp_paddles {
                paddle.pos.y = config.clamp_paddle_y(paddle.pos.y);
            }
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball, dt: f32) {
    ball.pos += ball.vel * dt;
}
