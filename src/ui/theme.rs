// ui/theme.rs - Splash Visual Theme
//
// Color palette and widget styles. The pill chrome is independent of the
// toggle state; only hover feedback varies.

use iced::widget::{button, container};
use iced::{Background, Border, Theme};

use crate::constants::layout;

/// Color palette for the splash screen
pub mod palette {
    use iced::Color;

    /// Near-black ink for title and button copy
    pub const INK: Color = Color::from_rgb(0.05, 0.05, 0.08);
    /// Subtitle ink at 80% opacity
    pub const INK_SOFT: Color = Color::from_rgba(0.05, 0.05, 0.08, 0.8);
    /// Pill fill, 15% white
    pub const PILL_FILL: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.15);
    /// Brighter pill fill on hover
    pub const PILL_FILL_HOVER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.22);
    /// Pill border, 30% white
    pub const PILL_BORDER: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.3);
    /// Flat stand-in when the background texture is missing
    pub const BACKDROP: Color = Color::from_rgb(0.91, 0.88, 0.82);
}

/// Capsule chrome for the toggle button.
pub fn pill(_theme: &Theme, status: button::Status) -> button::Style {
    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PILL_FILL_HOVER,
        _ => palette::PILL_FILL,
    };
    button::Style {
        background: Some(Background::Color(fill)),
        text_color: palette::INK,
        border: Border {
            color: palette::PILL_BORDER,
            width: layout::PILL_BORDER_WIDTH,
            // Radius far beyond half the button height reads as a capsule
            radius: 100.0.into(),
        },
        ..Default::default()
    }
}

/// Full-window flat fill used when no texture could be resolved.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKDROP)),
        ..Default::default()
    }
}
