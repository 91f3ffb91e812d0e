use ratatui::style::Color;

/// Unified color theme for the application
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Toast border
    pub fn success() -> Color {
        Color::Green
    }

    /// Invalid input
    pub fn warn() -> Color {
        Color::Yellow
    }

    /// Focused control
    pub fn highlight() -> Color {
        Color::Cyan
    }

    /// Selection marker/arrow
    pub fn selection_marker() -> Color {
        Color::Green
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Accent for numbers/values
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
