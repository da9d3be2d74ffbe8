use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Event"),
        Cell::from("Categories"),
        Cell::from("Results"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = app
        .board
        .events
        .iter()
        .map(|event| {
            let marker = if event.active { "▶" } else { " " };
            let result_count = app
                .board
                .all_results
                .iter()
                .filter(|r| r.event == event.name)
                .count();
            Row::new(vec![
                Cell::from(marker).style(styles::highlight_style()),
                Cell::from(event.name.as_str())
                    .style(Style::default().fg(styles::event_color(event.color))),
                Cell::from(event.categories.join(", ")),
                Cell::from(result_count.to_string()),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Percentage(35),
        Constraint::Fill(1),
        Constraint::Length(8),
    ];

    let title = format!(" Events ({}) - [Enter] show ", app.board.events.len());

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(true)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    if !app.board.events.is_empty() {
        state.select(Some(app.events_selection));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
