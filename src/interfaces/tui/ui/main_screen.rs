use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::interfaces::tui::app::App;

const URI_TRUNCATE_LENGTH: usize = 52;

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.controller.is_empty() {
        let empty_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(vec![Span::styled(
                "No objects found",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "[a]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " to create your first object",
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];

        let empty = Paragraph::new(empty_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title("Objects")
                    .title_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Span::styled(
            "Label",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "URI",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Created",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .bottom_margin(1);

    let mut rows = Vec::with_capacity(app.controller.len());
    for object in app.controller.items() {
        let uri = object.uri();
        let display_uri = if uri.len() > URI_TRUNCATE_LENGTH {
            format!("{}...", &uri[..URI_TRUNCATE_LENGTH])
        } else {
            uri
        };

        rows.push(Row::new(vec![
            Span::styled(
                object.label().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(display_uri, Style::default().fg(Color::Blue)),
            Span::styled(
                object.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                Style::default().fg(Color::Green),
            ),
        ]));
    }

    let title = format!("Objects ({})", app.controller.len());

    let table = Table::new(
        rows,
        [
            ratatui::layout::Constraint::Length(18), // Label
            ratatui::layout::Constraint::Min(30),    // URI
            ratatui::layout::Constraint::Length(20), // Created
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}
