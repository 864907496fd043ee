//! Pong desktop client
//!
//! Opens the window, polls the keyboard and replays the core draw list.
//! Frames are paced by the toolkit's vsync alone.

mod input;
mod renderer;

use anyhow::Context;
use game_core::{draw_list, step, Config, GameState};
use macroquad::prelude::*;
use renderer::FontMetrics;

fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: config.window_title.clone(),
        window_width: config.game_width as i32,
        window_height: config.game_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn load_config(path: Option<String>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let config = Config::load(&path).with_context(|| format!("loading config {path}"))?;
            log::info!("Loaded config from {path}");
            Ok(config)
        }
        None => {
            log::info!("No config file given, using defaults");
            Ok(Config::new())
        }
    }
}

async fn run(config: Config) {
    let mut state = GameState::new(&config);
    let font = if config.stage.keeps_score() {
        renderer::load_font(&config.font_path).await
    } else {
        None
    };
    if font.is_some() {
        state.set_metrics(Box::new(FontMetrics::new(font.clone())), &config);
    }
    log::info!("Starting {:?} stage, opponent {:?}", config.stage, config.opponent);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let frame_input = input::read_frame_input();
        let events = step(&mut state, &frame_input, get_frame_time(), &config);
        if events.ball_hit_paddle() {
            log::debug!("Paddle return, ball speed {:.1}", state.ball.vel.length());
        } else if events.ball_hit_wall() {
            log::trace!("Wall bounce at t={:.2}", state.time.now);
        }

        renderer::draw_frame(&draw_list(&state, &config), font.as_ref());
        next_frame().await;
    }

    log::info!("Shutting down, final score {}", state.score.display());
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Pong starting...");

    let config = load_config(std::env::args().nth(1))?;
    macroquad::Window::from_config(window_conf(&config), run(config));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_matches_game_size() {
        let conf = window_conf(&Config::new());
        assert_eq!(conf.window_title, "PONG");
        assert_eq!(conf.window_width, 800);
        assert_eq!(conf.window_height, 600);
        assert!(!conf.window_resizable);
    }

    #[test]
    fn test_default_config_without_path() {
        assert_eq!(load_config(None).unwrap(), Config::new());
    }

    #[test]
    fn test_missing_config_file_fails_fast() {
        let err = load_config(Some("no/such/pong.json".to_string())).unwrap_err();
        assert!(err.to_string().contains("no/such/pong.json"));
    }
}
