/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;
    pub const WINDOW_TITLE: &'static str = "PONG";

    // Paddle
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 400.0; // units per second
    pub const PADDLE_OFFSET_WALL: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const INITIAL_VELOCITY_X: f32 = 100.0;
    pub const INITIAL_VELOCITY_Y: f32 = 60.0;
    pub const VELOCITY_MULTIPLIER: f32 = 1.1; // Applied on every wall/paddle contact
    pub const CONTACT_NUDGE: f32 = 10.0;

    // Score text
    pub const SCORE_TEXT_SIZE: u16 = 24;
    pub const FONT_PATH: &'static str = "res/fonts/RobotoMono-Regular.ttf";

    // Frame
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps

    // CPU opponent
    pub const CPU_DEADZONE: f32 = 8.0;
}
