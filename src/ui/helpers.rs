use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color as TermColor,
};

use crate::color::Color;

pub const SLIDER_WIDTH: usize = 24;

pub fn to_term_color(color: Color) -> TermColor {
    TermColor::Rgb(color.red, color.green, color.blue)
}

/// Text color that stays readable on top of `color`.
pub fn contrast_color(color: Color) -> TermColor {
    if color.is_light() {
        TermColor::Black
    } else {
        TermColor::White
    }
}

/// Split a slider track into filled and empty cell counts.
pub fn slider_cells(value: u8, width: usize) -> (usize, usize) {
    let filled = (usize::from(value) * width + 127) / 255;
    (filled, width - filled)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A `width` x `height` rect centered horizontally, sitting `margin` rows above the bottom of `r`.
pub fn bottom_rect(width: u16, height: u16, margin: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.bottom().saturating_sub(height + margin).max(r.y);
    Rect::new(x, y, width, height)
}
