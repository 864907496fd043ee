//! Replays the core draw list with macroquad

use game_core::{DrawCommand, TextMetrics};
use macroquad::prelude::*;

/// Load the score font. A missing or broken file is logged and the built-in
/// font is used instead.
pub async fn load_font(path: &str) -> Option<Font> {
    match load_ttf_font(path).await {
        Ok(font) => {
            log::info!("Loaded font {path}");
            Some(font)
        }
        Err(e) => {
            log::warn!("Failed to load font {path}: {e:?}, using built-in font");
            None
        }
    }
}

/// Text measured with the font actually used for drawing
pub struct FontMetrics {
    font: Option<Font>,
}

impl FontMetrics {
    pub fn new(font: Option<Font>) -> Self {
        Self { font }
    }
}

impl TextMetrics for FontMetrics {
    fn text_width(&self, text: &str, size: u16) -> f32 {
        measure_text(text, self.font.as_ref(), size, 1.0).width
    }
}

pub fn draw_frame(commands: &[DrawCommand], font: Option<&Font>) {
    clear_background(BLACK);

    for command in commands {
        match command {
            DrawCommand::Rect { min, size } => draw_rectangle(min.x, min.y, size.x, size.y, WHITE),
            DrawCommand::Circle { center, radius } => draw_circle(center.x, center.y, *radius, WHITE),
            DrawCommand::Text { content, pos, size } => {
                // macroquad places text by baseline
                let dims = measure_text(content, font, *size, 1.0);
                draw_text_ex(
                    content,
                    pos.x,
                    pos.y + dims.offset_y,
                    TextParams {
                        font,
                        font_size: *size,
                        color: WHITE,
                        ..Default::default()
                    },
                );
            }
        }
    }
}
