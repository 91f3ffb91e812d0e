mod state;

use clap::ValueEnum;
use crossterm::event::KeyCode;

use crate::color::Channel;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

/// Which control receives keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Hex,
    Red,
    Green,
    Blue,
    Mode,
}

pub const FOCUS_ORDER: [Focus; 5] = [
    Focus::Hex,
    Focus::Red,
    Focus::Green,
    Focus::Blue,
    Focus::Mode,
];

impl Focus {
    pub fn next(self) -> Self {
        let index = FOCUS_ORDER.iter().position(|f| *f == self).unwrap_or(0);
        FOCUS_ORDER[(index + 1) % FOCUS_ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let index = FOCUS_ORDER.iter().position(|f| *f == self).unwrap_or(0);
        FOCUS_ORDER[(index + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()]
    }

    /// The color channel a slider focus edits.
    pub fn channel(self) -> Option<Channel> {
        match self {
            Focus::Red => Some(Channel::Red),
            Focus::Green => Some(Channel::Green),
            Focus::Blue => Some(Channel::Blue),
            Focus::Hex | Focus::Mode => None,
        }
    }
}

/// What the copy action puts on the clipboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CopyMode {
    #[default]
    Hex,
    Rgb,
}

impl CopyMode {
    pub fn toggle(self) -> Self {
        match self {
            CopyMode::Hex => CopyMode::Rgb,
            CopyMode::Rgb => CopyMode::Hex,
        }
    }
}
