mod help;
mod helpers;
mod picker;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, Focus};
use crate::toast::Toast;
use theme::Theme;

use help::build_help_text;
use helpers::{bottom_rect, centered_rect};

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Pickr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color picker",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(header, layout[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(layout[1]);

    picker::render_plate(frame, body[0], app);

    let mut control_lines = vec![Line::from("")];
    control_lines.extend(picker::build_controls_text(app).lines);
    let controls = Paragraph::new(Text::from(control_lines))
        .style(Style::default().fg(Theme::text()))
        .alignment(Alignment::Left)
        .block(rounded_block().title(" Color "));
    frame.render_widget(controls, body[1]);

    let footer = Paragraph::new(Text::from(keybinds_line(app)))
        .alignment(Alignment::Left)
        .block(rounded_block());
    frame.render_widget(footer, layout[2]);

    if app.show_help {
        render_help_popup(frame);
    }
    if let Some(toast) = &app.toast {
        render_toast(frame, toast);
    }
}

fn rounded_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

fn render_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 80, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(build_help_text())
        .alignment(Alignment::Left)
        .block(rounded_block().title(" Help "));
    frame.render_widget(popup, area);
}

fn render_toast(frame: &mut Frame, toast: &Toast) {
    let width = u16::try_from(toast.message.chars().count() + 4).unwrap_or(u16::MAX);
    let area = bottom_rect(width, 3, 3, frame.area());
    frame.render_widget(Clear, area);

    let (border, text) = if toast.is_fading() {
        (Theme::dim(), Style::default().fg(Theme::dim()))
    } else {
        (
            Theme::success(),
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD),
        )
    };

    let widget = Paragraph::new(Line::from(Span::styled(toast.message.as_str(), text)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border)),
        );
    frame.render_widget(widget, area);
}

fn keybinds_line(app: &App) -> Line<'static> {
    let focus_hint = match app.focus {
        Focus::Hex => "Type hex digits",
        Focus::Red | Focus::Green | Focus::Blue => "←/→ ±1  PgUp/PgDn ±16",
        Focus::Mode => "←/→ Switch mode",
    };
    Line::from(vec![
        Span::styled(
            format!(" {focus_hint}"),
            Style::default().fg(Theme::accent()),
        ),
        Span::styled(
            "  Tab: Focus  g: Generate  Enter: Copy  m: Mode  ?: Help  q: Quit",
            Style::default().fg(Theme::dim()),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::CopyMode;
    use crate::clipboard::Memory;
    use crate::color::Color as PickerColor;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(PickerColor::DEFAULT, CopyMode::Rgb, Box::new(Memory::default()))
    }

    #[test]
    fn shows_color_values() {
        let screen = render(&app());
        assert!(screen.contains("Pickr"));
        assert!(screen.contains("# DDDEEE"));
        assert!(screen.contains("rgb(221, 222, 238)"));
        assert!(screen.contains("#DDDEEE"));
        assert!(screen.contains(" 238"));
        assert!(screen.contains("( ) HEX  (•) RGB"));
    }

    #[test]
    fn shows_toast_message() {
        let mut app = app();
        app.toast = Some(Toast::new("#DDDEEE copied", Instant::now()));
        let screen = render(&app);
        assert!(screen.contains("#DDDEEE copied"));
    }

    #[test]
    fn shows_help_overlay() {
        let mut app = app();
        app.show_help = true;
        let screen = render(&app);
        assert!(screen.contains("Key bindings"));
    }
}
