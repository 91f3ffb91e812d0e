use std::time::Instant;

use crossterm::event::KeyCode;

use crate::clipboard::Clipboard;
use crate::color::{self, Channel, Color};
use crate::toast::Toast;

use super::{AppEvent, CopyMode, Focus};

const COARSE_STEP: u8 = 16;
/// One past a full hex code, enough to flag overlong input.
const HEX_INPUT_LIMIT: usize = 7;

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub color: Color,
    pub hex_input: String,
    pub focus: Focus,
    pub copy_mode: CopyMode,
    pub toast: Option<Toast>,
    pub show_help: bool,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    pub fn new(color: Color, copy_mode: CopyMode, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            running: true,
            color,
            hex_input: color.hex_code(),
            focus: Focus::Hex,
            copy_mode,
            toast: None,
            show_help: false,
            clipboard,
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        self.update_at(event, Instant::now());
    }

    fn update_at(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Tick => {}
            AppEvent::KeyPress(key) => self.handle_key(key, now),
        }

        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }

    fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Esc => {
                if let Some(toast) = self.toast.as_mut() {
                    toast.dismiss(now);
                } else {
                    self.show_help = false;
                }
            }
            KeyCode::Char('g' | ' ') => self.generate(),
            KeyCode::Char('m') => self.toggle_copy_mode(),
            KeyCode::Char('y') | KeyCode::Enter => self.copy_to_clipboard(now),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            _ => match self.focus {
                Focus::Hex => self.handle_hex_key(key, now),
                Focus::Mode => self.handle_mode_key(key),
                Focus::Red | Focus::Green | Focus::Blue => self.handle_slider_key(key),
            },
        }
    }

    /// Replace the current color and resync the hex field with it.
    pub fn update_color(&mut self, color: Color) {
        tracing::debug!(color = %color, "color updated");
        self.color = color;
        self.hex_input = color.hex_code();
    }

    fn generate(&mut self) {
        self.update_color(color::random_color());
    }

    fn toggle_copy_mode(&mut self) {
        self.copy_mode = self.copy_mode.toggle();
    }

    fn handle_hex_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Backspace | KeyCode::Delete => {
                self.hex_input.pop();
            }
            KeyCode::Char(ch) => {
                let mut upper = ch.to_uppercase();
                if ch.is_control()
                    || upper.len() != 1
                    || self.hex_input.chars().count() >= HEX_INPUT_LIMIT
                {
                    return;
                }
                self.hex_input.extend(upper.next());
            }
            _ => return,
        }
        self.apply_hex_input(now);
    }

    fn apply_hex_input(&mut self, now: Instant) {
        if self.hex_input.is_empty() {
            return;
        }
        match color::hex_to_color(&self.hex_input) {
            Ok(color) => self.update_color(color),
            Err(_) if self.hex_input.chars().count() > 6 => {
                let message = format!("#{} Invalid color", self.hex_input);
                self.show_toast(message, now);
            }
            Err(_) => {}
        }
    }

    fn handle_slider_key(&mut self, key: KeyCode) {
        let Some(channel) = self.focus.channel() else {
            return;
        };
        let current = self.color.channel(channel);
        let value = match key {
            KeyCode::Left => current.saturating_sub(1),
            KeyCode::Right => current.saturating_add(1),
            KeyCode::PageDown => current.saturating_sub(COARSE_STEP),
            KeyCode::PageUp => current.saturating_add(COARSE_STEP),
            KeyCode::Home => u8::MIN,
            KeyCode::End => u8::MAX,
            _ => return,
        };
        self.set_channel(channel, value);
    }

    fn set_channel(&mut self, channel: Channel, value: u8) {
        self.update_color(self.color.with_channel(channel, value));
    }

    fn handle_mode_key(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Left | KeyCode::Right) {
            self.toggle_copy_mode();
        }
    }

    fn copy_to_clipboard(&mut self, now: Instant) {
        self.toast = None;

        let text = match self.copy_mode {
            CopyMode::Hex => {
                if !color::is_valid_hex(&self.hex_input) {
                    self.show_toast("Invalid color code", now);
                    return;
                }
                format!("#{}", self.hex_input)
            }
            CopyMode::Rgb => self.color.to_rgb(),
        };

        match self.clipboard.copy(&text) {
            Ok(()) => {
                tracing::info!(%text, "copied to clipboard");
                self.show_toast(format!("{text} copied"), now);
            }
            Err(err) => {
                tracing::warn!(%text, error = %err, "clipboard copy failed");
                self.show_toast(format!("Copy failed: {err}"), now);
            }
        }
    }

    fn show_toast(&mut self, message: impl Into<String>, now: Instant) {
        self.toast = Some(Toast::new(message, now));
    }
}
