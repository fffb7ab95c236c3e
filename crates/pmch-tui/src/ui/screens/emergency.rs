use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

use super::placeholder;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.lang();
    let state = app.contacts.state();

    let block = Block::default()
        .title(format!(" {} ", lang.pick("आपातकालीन नंबर", "Emergency Numbers")))
        .title_style(styles::emergency_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let contacts = match state.data {
        Some(ref list) if !list.is_empty() => list,
        _ => {
            frame.render_widget(Paragraph::new(placeholder(&state, lang)).block(block), area);
            return;
        }
    };

    let items: Vec<ListItem> = contacts
        .iter()
        .enumerate()
        .map(|(i, contact)| {
            let style = if i == app.contact_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", contact.contact_type.label(lang)),
                        styles::highlight_style(),
                    ),
                    Span::raw(contact.display_name(lang).to_string()),
                ]),
                Line::from(Span::styled(
                    format!("    📞 {}", contact.phone),
                    styles::emergency_style(),
                )),
            ];
            ListItem::new(lines).style(style)
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(app.contact_selection));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
}
