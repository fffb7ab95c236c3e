use ratatui::{
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

use super::placeholder;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.lang();
    let state = app.opd_timings.state();

    let block = Block::default()
        .title(format!(" {} ", lang.pick("OPD समय", "OPD Timings")))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let timings = match state.data {
        Some(ref list) if !list.is_empty() => list,
        _ => {
            frame.render_widget(Paragraph::new(placeholder(&state, lang)).block(block), area);
            return;
        }
    };

    let header = Row::new(vec![
        Cell::from(lang.pick("विभाग", "Department")),
        Cell::from(lang.pick("समय", "Timings")),
        Cell::from(lang.pick("स्थान", "Location")),
    ])
    .style(styles::highlight_style())
    .bottom_margin(1);

    let rows: Vec<Row> = timings
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let style = if i == app.opd_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            Row::new(vec![
                Cell::from(t.name(lang).to_string()),
                Cell::from(Line::styled(t.opd_timings.clone(), styles::success_style())),
                Cell::from(t.location(lang).to_string()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(35),
        Constraint::Percentage(35),
    ];
    let table = Table::new(rows, widths).header(header).block(block);

    let mut table_state = TableState::default();
    table_state.select(Some(app.opd_selection));
    frame.render_stateful_widget(table, area, &mut table_state);
}
