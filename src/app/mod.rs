mod state;

use crossterm::event::KeyCode;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

/// The clickable controls, in on-screen order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Hex,
    Rgb,
    Generate,
    Copy,
}

pub const CONTROLS: [Control; 4] = [Control::Hex, Control::Rgb, Control::Generate, Control::Copy];

impl Control {
    /// Text drawn on the button.
    pub fn label(self) -> &'static str {
        match self {
            Control::Hex => "HEX Color",
            Control::Rgb => "RGB Color",
            Control::Generate => "Generate Random color",
            Control::Copy => "⧉",
        }
    }

    /// Name the control is announced by; differs from the label only for the
    /// icon-only copy button.
    pub fn name(self) -> &'static str {
        match self {
            Control::Copy => "copy-icon",
            other => other.label(),
        }
    }

    pub fn hotkey(self) -> char {
        match self {
            Control::Hex => 'h',
            Control::Rgb => 'r',
            Control::Generate => 'g',
            Control::Copy => 'c',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Control> {
        CONTROLS
            .into_iter()
            .find(|control| control.hotkey() == c.to_ascii_lowercase())
    }
}
