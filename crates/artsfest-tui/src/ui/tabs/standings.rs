use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use artsfest_core::utils::truncate_string;

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Team"),
        Cell::from("Gold"),
        Cell::from("Silver"),
        Cell::from("Bronze"),
        Cell::from("Points"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = app
        .board
        .standings
        .iter()
        .map(|standing| {
            Row::new(vec![
                Cell::from(standing.rank.to_string()).style(styles::rank_style(standing.rank)),
                Cell::from(truncate_string(standing.name(), 40))
                    .style(Style::default().fg(styles::hex_color(&standing.team.color))),
                Cell::from(standing.gold.to_string()).style(Style::default().fg(styles::GOLD)),
                Cell::from(standing.silver.to_string()).style(Style::default().fg(styles::SILVER)),
                Cell::from(standing.bronze.to_string()).style(Style::default().fg(styles::BRONZE)),
                Cell::from(standing.total_points.to_string()).style(styles::highlight_style()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
    ];

    let title = format!(" Team Standings ({}) ", app.board.standings.len());

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
    if !app.board.standings.is_empty() {
        state.select(Some(app.standings_selection));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
