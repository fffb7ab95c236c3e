use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use pmch_core::models::FaqCategory;

use crate::app::App;
use crate::ui::styles;

use super::placeholder;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    render_categories(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_questions(frame, app, body[0], body[1]);
}

fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.lang();
    let mut spans = vec![Span::styled(" [c] ", styles::muted_style())];
    for (i, category) in FaqCategory::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", styles::muted_style()));
        }
        let style = styles::tab_style(*category == app.faq_category);
        spans.push(Span::styled(category.label(lang), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_questions(frame: &mut Frame, app: &App, list_area: Rect, answer_area: Rect) {
    let lang = app.lang();
    let state = app.faqs.state();
    let faqs = app.filtered_faqs();

    let list_block = Block::default()
        .title(format!(" {} ({}) ", lang.pick("सवाल", "Questions"), faqs.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    let answer_block = Block::default()
        .title(format!(" {} ", lang.pick("जवाब", "Answer")))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    if state.data.is_none() {
        frame.render_widget(Paragraph::new(placeholder(&state, lang)).block(list_block), list_area);
        frame.render_widget(answer_block, answer_area);
        return;
    }

    if faqs.is_empty() {
        let empty = Line::styled(
            lang.pick("कोई सवाल नहीं मिला", "No questions found"),
            styles::muted_style(),
        );
        frame.render_widget(Paragraph::new(empty).block(list_block), list_area);
        frame.render_widget(answer_block, answer_area);
        return;
    }

    let items: Vec<ListItem> = faqs
        .iter()
        .enumerate()
        .map(|(i, faq)| {
            let style = if i == app.faq_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            ListItem::new(Line::from(faq.question(lang).to_string())).style(style)
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(app.faq_selection));
    frame.render_stateful_widget(List::new(items).block(list_block), list_area, &mut list_state);

    let answer = faqs
        .get(app.faq_selection)
        .map(|faq| {
            vec![
                Line::styled(faq.question(lang).to_string(), styles::highlight_style()),
                Line::from(""),
                Line::from(faq.answer(lang).to_string()),
            ]
        })
        .unwrap_or_default();
    let paragraph = Paragraph::new(answer)
        .block(answer_block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, answer_area);
}
