use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{SLIDER_WIDTH, contrast_color, slider_cells, to_term_color};
use super::theme::Theme;
use crate::app::{App, CopyMode, Focus};
use crate::color::{self, Channel, Color};

/// The color plate: a block filled with the current color.
pub fn render_plate(frame: &mut Frame, area: Rect, app: &App) {
    let fill = to_term_color(app.color);
    let label_style = Style::default()
        .fg(contrast_color(app.color))
        .bg(fill)
        .add_modifier(Modifier::BOLD);

    let padding = area.height.saturating_sub(3) / 2;
    let mut lines = vec![Line::from(""); usize::from(padding)];
    lines.push(Line::from(Span::styled(
        format!("#{}", app.color.hex_code()),
        label_style,
    )));

    let plate = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .style(Style::default().bg(fill))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()).bg(fill)),
        );
    frame.render_widget(plate, area);
}

pub fn build_controls_text(app: &App) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(hex_line(app));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{:<7}", "RGB"), Style::default().fg(Theme::dim())),
        Span::styled(app.color.to_rgb(), Style::default().fg(Theme::text())),
    ]));
    lines.push(Line::from(""));

    for (focus, label) in [
        (Focus::Red, "Red"),
        (Focus::Green, "Green"),
        (Focus::Blue, "Blue"),
    ] {
        lines.push(slider_line(app, focus, label));
    }
    lines.push(Line::from(""));
    lines.push(mode_line(app));

    Text::from(lines)
}

fn marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled(
            "> ",
            Style::default()
                .fg(Theme::selection_marker())
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("  ")
    }
}

fn label(text: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Theme::highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::dim())
    };
    Span::styled(format!("{text:<7}"), style)
}

fn hex_line(app: &App) -> Line<'static> {
    let focused = app.focus == Focus::Hex;
    let value_color = if color::is_valid_hex(&app.hex_input) {
        Theme::text()
    } else {
        Theme::warn()
    };
    let mut spans = vec![
        marker(focused),
        label("Hex", focused),
        Span::styled("# ", Style::default().fg(Theme::dim())),
        Span::styled(
            app.hex_input.clone(),
            Style::default().fg(value_color).add_modifier(Modifier::BOLD),
        ),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Theme::highlight())));
    }
    Line::from(spans)
}

fn slider_line(app: &App, focus: Focus, text: &str) -> Line<'static> {
    let focused = app.focus == focus;
    let channel = focus.channel().unwrap_or(Channel::Red);
    let value = app.color.channel(channel);
    let (filled, empty) = slider_cells(value, SLIDER_WIDTH);
    let fill_color = to_term_color(Color::new(0, 0, 0).with_channel(channel, u8::MAX));

    Line::from(vec![
        marker(focused),
        label(text, focused),
        Span::styled("█".repeat(filled), Style::default().fg(fill_color)),
        Span::styled("░".repeat(empty), Style::default().fg(Theme::dim())),
        Span::styled(
            format!(" {value:>3}"),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn mode_line(app: &App) -> Line<'static> {
    let focused = app.focus == Focus::Mode;
    let radio = |mode: CopyMode, text: &str| {
        let selected = app.copy_mode == mode;
        let style = if selected {
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::text())
        };
        Span::styled(
            format!("({}) {text}", if selected { "•" } else { " " }),
            style,
        )
    };

    Line::from(vec![
        marker(focused),
        label("Copy", focused),
        radio(CopyMode::Hex, "HEX"),
        Span::raw("  "),
        radio(CopyMode::Rgb, "RGB"),
    ])
}
