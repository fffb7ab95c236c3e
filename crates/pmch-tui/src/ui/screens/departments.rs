use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use pmch_core::models::Department;
use pmch_core::utils::truncate_string;
use pmch_core::Language;

use crate::app::App;
use crate::ui::styles;

use super::placeholder;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_department_list(frame, app, chunks[0]);
    render_department_detail(frame, app, chunks[1]);
}

fn render_department_list(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.lang();
    let state = app.departments.state();
    let focused = app.department_detail.is_none();

    let block = Block::default()
        .title(format!(" {} ", lang.pick("विभाग", "Departments")))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let departments = match state.data {
        Some(ref list) if !list.is_empty() => list,
        _ => {
            frame.render_widget(Paragraph::new(placeholder(&state, lang)).block(block), area);
            return;
        }
    };

    let name_width = (area.width as usize).saturating_sub(4);
    let items: Vec<ListItem> = departments
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let style = if i == app.department_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            let lines = vec![
                Line::from(truncate_string(d.name(lang), name_width)),
                Line::styled(
                    format!("  {}", truncate_string(d.location(lang), name_width.saturating_sub(2))),
                    styles::muted_style(),
                ),
            ];
            ListItem::new(lines).style(style)
        })
        .collect();

    let title = format!(" {} ({}) ", lang.pick("विभाग", "Departments"), departments.len());
    let list = List::new(items).block(block.title(title));

    let mut list_state = ListState::default();
    list_state.select(Some(app.department_selection));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_department_detail(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.lang();
    let focused = app.department_detail.is_some();

    // Full record from the detail fetch, else the list row as a preview
    let (department, lines) = match &app.department_detail {
        Some(detail) => {
            let state = detail.view.state();
            match state.data {
                Some(department) => {
                    let lines = detail_lines(&department, lang, true);
                    (Some(department), lines)
                }
                None => (None, placeholder(&state, lang)),
            }
        }
        None => match app.selected_department() {
            Some(department) => {
                let lines = detail_lines(&department, lang, false);
                (Some(department), lines)
            }
            None => (None, Vec::new()),
        },
    };

    let title = department
        .as_ref()
        .map(|d| format!(" {} ", d.name(lang)))
        .unwrap_or_else(|| format!(" {} ", lang.pick("विवरण", "Details")));

    let block = Block::default()
        .title(title)
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn detail_lines(department: &Department, lang: Language, open: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(lang.pick("विवरण", "Description"), styles::highlight_style()),
        Line::from(department.description(lang).to_string()),
        Line::from(""),
        Line::styled(lang.pick("🕐 OPD समय", "🕐 OPD Timings"), styles::highlight_style()),
        Line::from(department.opd_timings.clone()),
        Line::from(""),
        Line::styled(lang.pick("📍 स्थान", "📍 Location"), styles::highlight_style()),
        Line::from(department.location(lang).to_string()),
        Line::from(""),
    ];

    let hint = if open {
        lang.pick("[Esc] वापस", "[Esc] Back")
    } else {
        lang.pick("[Enter] पूरी जानकारी", "[Enter] Full details")
    };
    lines.push(Line::from(Span::styled(hint, styles::muted_style())));
    lines
}
