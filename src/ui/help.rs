use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&[
        "q: Quit",
        "?: Toggle help",
        "g/space: Generate random color",
        "Enter/y: Copy to clipboard",
        "m: Toggle copy mode (hex / rgb)",
        "Tab/Down, Shift+Tab/Up: Move focus",
        "esc: Dismiss toast / close help",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Hex field"));
    lines.extend(section_lines(&[
        "Type 6 hex digits to set the color",
        "Backspace: Delete last digit",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Sliders"));
    lines.extend(section_lines(&[
        "Left/Right: -1/+1",
        "PgDn/PgUp: -16/+16",
        "Home/End: 0/255",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Copy mode"));
    lines.extend(section_lines(&["Left/Right: Switch hex / rgb"]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
