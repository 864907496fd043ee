use crate::{Ball, Config, FrameInput, Opponent, Paddle, PaddleInput, Side};

/// Turn this frame's keys into paddle directions, honoring the stage and
/// opponent settings. Uncontrolled paddles get 0.
pub fn paddle_directions(
    input: &FrameInput,
    ball: &Ball,
    paddles: &[Paddle; 2],
    config: &Config,
) -> [i8; 2] {
    let left = input.left.direction();
    let right = if !config.stage.right_paddle_controlled() {
        0
    } else {
        match config.opponent {
            Opponent::Keyboard => input.right.direction(),
            Opponent::Cpu => cpu_input(ball, &paddles[Side::Right.index()], config).direction(),
        }
    };
    [left, right]
}

/// Calculate keys for a computer-controlled paddle
///
/// Strategy:
/// 1. If the ball is moving towards us, predict the height where it arrives.
/// 2. If that height is outside the dead zone around the paddle center, move there.
/// 3. If the ball is moving away, return to the middle of the court.
pub fn cpu_input(ball: &Ball, paddle: &Paddle, config: &Config) -> PaddleInput {
    let approaching = match paddle.side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };

    let target_y = if approaching {
        let time_to_reach = (paddle.pos.x - ball.pos.x) / ball.vel.x;
        ball.pos.y + ball.vel.y * time_to_reach.max(0.0)
    } else {
        config.game_height / 2.0
    };

    let diff = target_y - paddle.pos.y;
    let deadzone = config.cpu_deadzone;
    PaddleInput::new(diff < -deadzone, diff > deadzone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stage;
    use glam::Vec2;

    fn setup(stage: Stage, opponent: Opponent) -> (Config, [Paddle; 2]) {
        let config = Config {
            stage,
            opponent,
            ..Config::new()
        };
        let paddles = [
            Paddle::new(Side::Left, Vec2::new(config.paddle_x(Side::Left), 300.0)),
            Paddle::new(Side::Right, Vec2::new(config.paddle_x(Side::Right), 300.0)),
        ];
        (config, paddles)
    }

    fn both_down() -> FrameInput {
        FrameInput {
            left: PaddleInput::new(false, true),
            right: PaddleInput::new(false, true),
        }
    }

    #[test]
    fn test_right_paddle_idle_before_two_player() {
        let (config, paddles) = setup(Stage::Scoring, Opponent::Keyboard);
        let ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, 60.0));

        assert_eq!(paddle_directions(&both_down(), &ball, &paddles, &config), [1, 0]);
    }

    #[test]
    fn test_keyboard_opponent() {
        let (config, paddles) = setup(Stage::TwoPlayer, Opponent::Keyboard);
        let ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(100.0, 60.0));

        assert_eq!(paddle_directions(&both_down(), &ball, &paddles, &config), [1, 1]);
    }

    #[test]
    fn test_cpu_ignores_keys() {
        let (config, paddles) = setup(Stage::TwoPlayer, Opponent::Cpu);
        // Ball heading right, arriving well above the paddle
        let ball = Ball::new(Vec2::new(400.0, 100.0), Vec2::new(100.0, 0.0));

        assert_eq!(paddle_directions(&both_down(), &ball, &paddles, &config), [1, -1]);
    }

    #[test]
    fn test_cpu_predicts_arrival_height() {
        let (config, paddles) = setup(Stage::TwoPlayer, Opponent::Cpu);
        let right = &paddles[1];
        // Reaches x=777.5 after 3.775s, by then y = 100 + 60 * 3.775 = 326.5
        let ball = Ball::new(Vec2::new(400.0, 100.0), Vec2::new(100.0, 60.0));

        let keys = cpu_input(&ball, right, &config);

        assert_eq!(keys, PaddleInput::new(false, true));
    }

    #[test]
    fn test_cpu_holds_inside_deadzone() {
        let (config, paddles) = setup(Stage::TwoPlayer, Opponent::Cpu);
        let ball = Ball::new(Vec2::new(400.0, 303.0), Vec2::new(100.0, 0.0));

        assert_eq!(cpu_input(&ball, &paddles[1], &config).direction(), 0);
    }

    #[test]
    fn test_cpu_deadzone_is_configurable() {
        let (mut config, paddles) = setup(Stage::TwoPlayer, Opponent::Cpu);
        let ball = Ball::new(Vec2::new(400.0, 303.0), Vec2::new(100.0, 0.0));

        config.cpu_deadzone = 1.0;
        assert_eq!(cpu_input(&ball, &paddles[1], &config).direction(), 1);
    }

    #[test]
    fn test_cpu_returns_to_center_when_ball_moves_away() {
        let (config, mut paddles) = setup(Stage::TwoPlayer, Opponent::Cpu);
        paddles[1].pos.y = 500.0;
        let ball = Ball::new(Vec2::new(400.0, 550.0), Vec2::new(-100.0, 0.0));

        assert_eq!(cpu_input(&ball, &paddles[1], &config).direction(), -1);
    }
}
