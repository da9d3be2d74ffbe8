use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use artsfest_core::utils::truncate_string;

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Participant"),
        Cell::from("Program"),
        Cell::from("Points"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = app
        .board
        .top_performers
        .iter()
        .map(|performer| {
            Row::new(vec![
                Cell::from(performer.id.to_string()).style(styles::rank_style(performer.id)),
                Cell::from(truncate_string(&performer.name, 40)),
                Cell::from(truncate_string(&performer.program, 40)),
                Cell::from(performer.points.to_string()).style(styles::highlight_style()),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(40),
        Constraint::Fill(1),
        Constraint::Length(8),
    ];

    let title = format!(" Top Performers ({}) ", app.board.top_performers.len());

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
    if !app.board.top_performers.is_empty() {
        state.select(Some(app.performers_selection));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
