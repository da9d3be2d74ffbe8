use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use artsfest_core::models::Placement;
use artsfest_core::utils::{position_text, truncate_string};

use crate::app::{App, AppState};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_result_list(frame, app, chunks[0]);
    render_result_detail(frame, app, chunks[1]);
}

fn render_result_list(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Program"),
        Cell::from("Category"),
        Cell::from("Entries"),
    ])
    .style(styles::title_style())
    .height(1);

    let results = app.filtered_results();

    let rows: Vec<Row> = results
        .iter()
        .map(|result| {
            Row::new(vec![
                Cell::from(truncate_string(&result.program, 30)),
                Cell::from(truncate_string(&result.category, 16)),
                Cell::from(result.participants.len().to_string()),
            ])
            .style(styles::list_item_style())
        })
        .collect();

    let widths = [
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Length(8),
    ];

    let title = if app.search_query.is_empty() {
        format!(" Results ({}) - [/] search ", results.len())
    } else {
        format!(" Results ({}) matching \"{}\" ", results.len(), app.search_query)
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(app.state != AppState::Searching)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    if !results.is_empty() {
        state.select(Some(app.results_selection));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_result_detail(frame: &mut Frame, app: &App, area: Rect) {
    let results = app.filtered_results();

    let lines = match results.get(app.results_selection) {
        Some(result) => {
            let mut lines = vec![
                Line::from(Span::styled(result.program.as_str(), styles::title_style())),
                Line::from(vec![
                    Span::styled("Event:    ", styles::muted_style()),
                    Span::raw(result.event.as_str()),
                ]),
                Line::from(vec![
                    Span::styled("Category: ", styles::muted_style()),
                    Span::raw(result.category.as_str()),
                ]),
                Line::from(""),
            ];

            for participant in &result.participants {
                let style = match participant.placement() {
                    Placement::Gold => styles::rank_style(1),
                    Placement::Silver => styles::rank_style(2),
                    Placement::Bronze => styles::rank_style(3),
                    Placement::Unplaced => styles::list_item_style(),
                };
                let mut spans = vec![
                    Span::styled(format!("{:<10}", position_text(&participant.position)), style),
                    Span::raw(participant.name.clone()),
                ];
                if let Some(grade) = participant.explicit_grade() {
                    spans.push(Span::styled(format!("  grade {}", grade), styles::muted_style()));
                }
                if let Some(points) = participant.points {
                    spans.push(Span::styled(format!("  {} pts", points), styles::highlight_style()));
                }
                lines.push(Line::from(spans));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "No results to show",
            styles::muted_style(),
        ))],
    };

    let block = Block::default()
        .title(" Placements ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
