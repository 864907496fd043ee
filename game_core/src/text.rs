//! Score text layout

/// Measures rendered text so it can be centered
pub trait TextMetrics {
    fn text_width(&self, text: &str, size: u16) -> f32;
}

/// Fixed-advance estimate for monospace fonts
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    /// Glyph advance as a fraction of the font size
    pub advance: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        // Roboto Mono advance width
        Self { advance: 0.6 }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str, size: u16) -> f32 {
        text.chars().count() as f32 * size as f32 * self.advance
    }
}

/// The score string and where its top-left corner sits
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreText {
    pub content: String,
    pub x: f32,
    pub y: f32,
    pub size: u16,
}

impl ScoreText {
    /// Replace the content and center it horizontally in `width`
    pub fn refresh(&mut self, content: String, size: u16, width: f32, metrics: &dyn TextMetrics) {
        let text_width = metrics.text_width(&content, size);
        self.x = width / 2.0 - text_width / 2.0;
        self.y = 0.0;
        self.size = size;
        self.content = content;
    }
}
