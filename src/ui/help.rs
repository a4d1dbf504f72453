use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;
use crate::app::CONTROLS;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Controls"));
    let controls: Vec<String> = CONTROLS
        .iter()
        .map(|control| format!("{}: {}", control.hotkey(), control.name()))
        .collect();
    lines.extend(section_lines(&controls));

    lines.push(Line::from(""));
    lines.push(section_title("Navigation"));
    lines.extend(section_lines(&[
        "Left/Right or Tab: Move focus between controls".to_string(),
        "Enter/space: Activate focused control".to_string(),
        "?: Toggle help".to_string(),
        "q/esc: Quit".to_string(),
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Notes"));
    lines.extend(section_lines(&[
        "Switching mode draws a new color".to_string(),
        "Any key dismisses a notice".to_string(),
    ]));

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

fn section_lines(items: &[String]) -> Vec<Line<'static>> {
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
