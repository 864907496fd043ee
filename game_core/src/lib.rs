pub mod components;
pub mod config;
pub mod params;
pub mod render;
pub mod resources;
pub mod state;
pub mod systems;
pub mod text;

pub use components::*;
pub use config::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use state::*;
pub use text::*;

/// Run one frame of the Pong simulation
pub fn step(state: &mut GameState, input: &FrameInput, dt: f32, config: &Config) -> Events {
    // Clamp dt to prevent large jumps (e.g. after the window was dragged)
    let clamped_dt = dt.clamp(0.0, config.max_dt);
    state.update(input, clamped_dt, config)
}
