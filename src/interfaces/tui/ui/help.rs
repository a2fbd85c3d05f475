use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let entries: [(&str, &str); 8] = [
        ("Up/Down, j/k", "Move the selection"),
        ("Home/End, g/G", "Jump to top / bottom"),
        ("a", "Create a new auto-labelled object"),
        ("d, Enter", "Delete the selected object (asks first)"),
        ("r", "Reload the list from the store"),
        ("?", "This help"),
        ("q", "Quit (asks first)"),
        ("Esc", "Close popups"),
    ];

    let mut lines = vec![Line::from("")];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<16}", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc, Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "  Every create and delete goes to the store first; the list only",
        Style::default().fg(Color::DarkGray),
    )]));
    lines.push(Line::from(vec![Span::styled(
        "  changes after the store confirms the operation.",
        Style::default().fg(Color::DarkGray),
    )]));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue))
            .title("Help")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );

    frame.render_widget(help, area);
}
