use ratatui::style::Color;

/// Fixed palette for the chrome around the generated color.
pub struct Theme;

impl Theme {
    /// Background of the app name badge
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Panel borders and help section titles
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Focused control, active mode and hotkeys
    pub fn highlight() -> Color {
        Color::LightCyan
    }

    /// Hints and attribution
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Idle controls and notice text
    pub fn text() -> Color {
        Color::White
    }

    /// The color string heading
    pub fn accent() -> Color {
        Color::LightBlue
    }
}
