use crate::params::Params;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Which iteration of the game is running. Later stages include everything
/// the earlier ones do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Left paddle moves, nothing else does
    PaddleMovement,
    /// Ball moves, bounces and resets on exit
    BallPhysics,
    /// Exits award points, score text is drawn
    Scoring,
    /// Right paddle is controlled as well
    #[default]
    TwoPlayer,
}

impl Stage {
    pub fn ball_moves(self) -> bool {
        self >= Stage::BallPhysics
    }

    pub fn keeps_score(self) -> bool {
        self >= Stage::Scoring
    }

    pub fn right_paddle_controlled(self) -> bool {
        self >= Stage::TwoPlayer
    }
}

/// Who drives the right paddle once it is controlled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Opponent {
    #[default]
    Keyboard,
    Cpu,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game_width: f32,
    pub game_height: f32,
    pub window_title: String,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_offset_wall: f32,
    pub ball_radius: f32,
    pub initial_velocity_x: f32,
    pub initial_velocity_y: f32,
    pub velocity_multiplier: f32,
    pub contact_nudge: f32,
    pub score_text_size: u16,
    pub font_path: String,
    pub max_dt: f32,
    pub stage: Stage,
    pub opponent: Opponent,
    /// Distance from the target height the CPU paddle tolerates
    pub cpu_deadzone: f32,
    /// Keep paddles fully inside the window (off by default)
    pub clamp_paddles: bool,
    /// Upper bound on ball speed after a contact (unbounded by default)
    pub max_ball_speed: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game_width: Params::GAME_WIDTH,
            game_height: Params::GAME_HEIGHT,
            window_title: Params::WINDOW_TITLE.to_string(),
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_offset_wall: Params::PADDLE_OFFSET_WALL,
            ball_radius: Params::BALL_RADIUS,
            initial_velocity_x: Params::INITIAL_VELOCITY_X,
            initial_velocity_y: Params::INITIAL_VELOCITY_Y,
            velocity_multiplier: Params::VELOCITY_MULTIPLIER,
            contact_nudge: Params::CONTACT_NUDGE,
            score_text_size: Params::SCORE_TEXT_SIZE,
            font_path: Params::FONT_PATH.to_string(),
            max_dt: Params::MAX_DT,
            stage: Stage::default(),
            opponent: Opponent::default(),
            cpu_deadzone: Params::CPU_DEADZONE,
            clamp_paddles: false,
            max_ball_speed: None,
        }
    }
}

/// Errors raised while loading a config file
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("game_width", self.game_width),
            ("game_height", self.game_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("max_dt", self.max_dt),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let non_negative = [
            ("paddle_offset_wall", self.paddle_offset_wall),
            ("initial_velocity_x", self.initial_velocity_x),
            ("initial_velocity_y", self.initial_velocity_y),
            ("contact_nudge", self.contact_nudge),
            ("cpu_deadzone", self.cpu_deadzone),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.velocity_multiplier.is_nan() || self.velocity_multiplier < 1.0 {
            return Err(ConfigError::Invalid(format!(
                "velocity_multiplier must be at least 1, got {}",
                self.velocity_multiplier
            )));
        }
        if let Some(max) = self.max_ball_speed {
            if max.is_nan() || max <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "max_ball_speed must be positive, got {max}"
                )));
            }
        }
        if self.clamp_paddles && self.paddle_height > self.game_height {
            return Err(ConfigError::Invalid(format!(
                "paddle_height {} does not fit in game_height {} with clamp_paddles",
                self.paddle_height, self.game_height
            )));
        }
        if self.score_text_size == 0 {
            return Err(ConfigError::Invalid("score_text_size must be non-zero".into()));
        }
        Ok(())
    }

    /// X position of a paddle's center based on its side
    pub fn paddle_x(&self, side: crate::Side) -> f32 {
        let inset = self.paddle_offset_wall + self.paddle_width / 2.0;
        match side {
            crate::Side::Left => inset,
            crate::Side::Right => self.game_width - inset,
        }
    }

    /// Depth from each side wall inside which the ball meets a paddle
    pub fn paddle_reach(&self) -> f32 {
        self.paddle_width + self.paddle_offset_wall
    }

    /// Clamp paddle Y to window bounds. A paddle taller than the window
    /// stays centered.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        let max = self.game_height - half_height;
        if half_height > max {
            return self.game_height / 2.0;
        }
        y.clamp(half_height, max)
    }
}
