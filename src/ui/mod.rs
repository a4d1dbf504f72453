mod help;
mod helpers;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, CONTROLS, Control};
use crate::color::ColorMode;
use help::build_help_text;
use helpers::{centered_rect, swatch_colors};
use theme::Theme;

pub const ATTRIBUTION: &str = "Made with 💖 By the randcolor contributors";

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "  randcolor  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "random color generator",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Left)
    .block(rounded_block());
    frame.render_widget(header, layout[0]);

    if app.show_help {
        let help = Paragraph::new(build_help_text())
            .alignment(Alignment::Left)
            .block(rounded_block().title(" Help "));
        frame.render_widget(help, layout[1]);
    } else {
        draw_body(frame, app, layout[1]);
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        ATTRIBUTION,
        Style::default().fg(Theme::dim()),
    )))
    .alignment(Alignment::Center)
    .block(rounded_block());
    frame.render_widget(footer, layout[2]);

    if let Some(message) = app.notification() {
        render_notification(frame, message);
    }
}

fn draw_body(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let block = rounded_block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .split(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        app.display(),
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, rows[0]);

    let (fill, ink) = swatch_colors(app.color.value);
    let swatch = Paragraph::new(Line::from(Span::styled(
        app.color.mode.as_str().to_uppercase(),
        Style::default().fg(ink),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(fill));
    frame.render_widget(swatch, rows[1]);

    let controls = Paragraph::new(controls_line(app)).alignment(Alignment::Center);
    frame.render_widget(controls, rows[2]);

    let hints = Paragraph::new(keybinds_line()).alignment(Alignment::Center);
    frame.render_widget(hints, rows[3]);
}

fn controls_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    for control in CONTROLS {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        let active_mode = match control {
            Control::Hex => app.color.mode == ColorMode::Hex,
            Control::Rgb => app.color.mode == ColorMode::Rgb,
            _ => false,
        };
        let focused = app.selected_control() == control;
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Theme::highlight())
                .add_modifier(Modifier::BOLD)
        } else if active_mode {
            Style::default()
                .fg(Theme::highlight())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Theme::text())
        };
        spans.push(Span::styled(format!("[ {} ]", control.label()), style));
    }
    Line::from(spans)
}

fn keybinds_line() -> Line<'static> {
    let mut spans = Vec::new();
    for control in CONTROLS {
        spans.push(Span::styled(
            format!("{}", control.hotkey()),
            Style::default().fg(Theme::highlight()),
        ));
        spans.push(Span::styled(
            format!(": {}  ", control.name()),
            Style::default().fg(Theme::dim()),
        ));
    }
    spans.push(Span::styled(
        "←/→ Enter  ?: Help  q: Quit",
        Style::default().fg(Theme::dim()),
    ));
    Line::from(spans)
}

fn render_notification(frame: &mut Frame, message: &str) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Theme::dim())),
            Span::styled(
                "any key",
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to dismiss", Style::default().fg(Theme::dim())),
        ]),
    ];

    let popup = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(rounded_block().title(" Notice "));
    frame.render_widget(popup, area);
}

fn rounded_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}
