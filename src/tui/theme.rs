use ratatui::style::Color;

use crate::model::{Category, Status, UiConfig};
use crate::ops::urgency::Severity;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub gold: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub today_bg: Color,
    pub school: Color,
    pub rugby: Color,
    pub music: Color,
    pub personal: Color,
}

impl Theme {
    /// Pastel theme on a light background
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFF, 0xF7, 0xFA),
            surface: Color::Rgb(0xFC, 0xE7, 0xF0),
            text: Color::Rgb(0x5A, 0x4A, 0x5E),
            text_bright: Color::Rgb(0x2B, 0x1B, 0x2E),
            highlight: Color::Rgb(0xE8, 0x3E, 0x8C),
            dim: Color::Rgb(0x9A, 0x8C, 0x9E),
            red: Color::Rgb(0xD6, 0x33, 0x48),
            yellow: Color::Rgb(0xC7, 0x7C, 0x02),
            green: Color::Rgb(0x2E, 0x9E, 0x5B),
            gold: Color::Rgb(0xB8, 0x86, 0x0B),
            selection_bg: Color::Rgb(0xF6, 0xD4, 0xE4),
            selection_border: Color::Rgb(0xE8, 0x3E, 0x8C),
            today_bg: Color::Rgb(0xF9, 0xDF, 0xEB),
            school: Color::Rgb(0x8E, 0x6B, 0xD8),
            rugby: Color::Rgb(0x2E, 0x9E, 0x5B),
            music: Color::Rgb(0x1F, 0x9E, 0x94),
            personal: Color::Rgb(0xE0, 0x7A, 0x3F),
        }
    }

    /// Same palette family on a dark background
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x1A, 0x12, 0x1F),
            surface: Color::Rgb(0x2A, 0x1D, 0x31),
            text: Color::Rgb(0xD8, 0xC8, 0xE0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x8A, 0x7B, 0x94),
            red: Color::Rgb(0xFF, 0x55, 0x66),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            gold: Color::Rgb(0xFF, 0xD7, 0x00),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_border: Color::Rgb(0xFB, 0x41, 0x96),
            today_bg: Color::Rgb(0x4A, 0x1C, 0x40),
            school: Color::Rgb(0xB9, 0x9C, 0xFF),
            rugby: Color::Rgb(0x66, 0xE0, 0x99),
            music: Color::Rgb(0x66, 0xDD, 0xD0),
            personal: Color::Rgb(0xFF, 0xB0, 0x7A),
        }
    }

    /// Built-in light or dark theme with `[ui.colors]` overrides applied
    pub fn from_config(ui: &UiConfig, dark: bool) -> Self {
        let mut theme = if dark { Theme::dark() } else { Theme::light() };

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "surface" => theme.surface = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "gold" => theme.gold = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_border" => theme.selection_border = color,
                    "today_bg" => theme.today_bg = color,
                    "school" => theme.school = color,
                    "rugby" => theme.rugby = color,
                    "music" => theme.music = color,
                    "personal" => theme.personal = color,
                    _ => {}
                }
            }
        }

        theme
    }

    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::School => self.school,
            Category::Rugby => self.rugby,
            Category::Music => self.music,
            Category::Personal => self.personal,
        }
    }

    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Todo => self.text,
            Status::InProgress => self.yellow,
            Status::Done => self.green,
        }
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Urgent => self.red,
            Severity::Warning => self.yellow,
            Severity::Relaxed => self.green,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
