use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use pmch_core::cache::now_millis;
use pmch_core::utils::format_last_updated;
use pmch_core::Language;

use crate::app::{App, AppState, FetchStatus, Screen};

use super::screens::{departments, emergency, faqs, info, opd};
use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(2), // Tabs
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame, app);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.lang();
    let title = Span::styled(
        format!("  PMCH {}", lang.pick("अस्पताल गाइड", "Hospital Guide")),
        styles::title_style(),
    );
    let hint = Span::styled(
        format!("[l] {}  [?] {}", lang.toggled(), lang.pick("मदद", "Help")),
        styles::muted_style(),
    );
    let padding = (area.width as usize).saturating_sub(title.width() + hint.width() + 2);

    let title_line = Line::from(vec![title, Span::raw(" ".repeat(padding)), hint]);
    let subtitle = Line::from(Span::styled(
        format!("  {}", lang.pick("पटना मेडिकल कॉलेज अस्पताल", "Patna Medical College Hospital")),
        styles::muted_style(),
    ));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(vec![title_line, subtitle]).block(block);
    frame.render_widget(paragraph, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.lang();
    let mut spans = vec![Span::raw(" ")];
    for (i, screen) in Screen::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        let label = format!("[{}] {}", i + 1, screen.title(lang));
        if *screen == app.screen {
            spans.push(Span::styled(label, styles::tab_style(true)));
        } else {
            spans.push(Span::styled(label, styles::muted_style()));
        }
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.screen {
        Screen::Departments => departments::render(frame, app, area),
        Screen::OpdTimings => opd::render(frame, app, area),
        Screen::Faqs => faqs::render(frame, app, area),
        Screen::Emergency => emergency::render(frame, app, area),
        Screen::Campus => info::render_campus(frame, app, area),
        Screen::About => info::render_about(frame, app, area),
    }
}

/// Left-hand status text: loading, error, or the age of the data shown.
pub fn status_text(status: &FetchStatus, now: i64, lang: Language) -> (String, Style) {
    if let Some(ref error) = status.error {
        let text = format!("{}: {}", lang.pick("डेटा लोड नहीं हो पाया", "Failed to load data"), error);
        return (text, styles::error_style());
    }
    match status.last_updated {
        Some(ts) => {
            let mut text = format_last_updated(ts, now, lang);
            if status.loading {
                text.push_str(lang.pick(" (ताज़ा हो रहा है...)", " (refreshing...)"));
            }
            (text, styles::muted_style())
        }
        None if status.loading => (
            lang.pick("लोड हो रहा है...", "Loading...").to_string(),
            styles::highlight_style(),
        ),
        None => (String::new(), styles::muted_style()),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.lang();
    let (left_text, left_style) = match app.status() {
        Some(status) => status_text(&status, now_millis(), lang),
        None => (String::new(), styles::muted_style()),
    };

    let shortcuts = format!(
        " [r] {} | [q] {} ",
        lang.pick("ताज़ा करें", "refresh"),
        lang.pick("बंद करें", "quit")
    );

    let left = Span::styled(format!(" {} ", left_text), left_style);
    let right = Span::styled(shortcuts, styles::muted_style());
    let padding = (area.width as usize).saturating_sub(left.width() + right.width());

    let status_line = Line::from(vec![left, Span::raw(" ".repeat(padding)), right]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn help_row(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), styles::help_key_style()),
        Span::styled(desc, styles::help_desc_style()),
    ])
}

fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(52, 20, frame.area());
    frame.render_widget(Clear, area);

    let lang = app.lang();
    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        Line::from(Span::styled("  PMCH Guide", styles::title_style())),
        Line::from(Span::styled(
            format!("  version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            lang.pick(" चलाना", " Navigation"),
            styles::highlight_style(),
        )),
        help_row("1-6", lang.pick("स्क्रीन बदलें", "Switch screens")),
        help_row("Tab", lang.pick("अगली / पिछली स्क्रीन", "Next / previous screen")),
        help_row("↑/↓ j/k", lang.pick("सूची में चलें", "Move in list")),
        help_row("Enter", lang.pick("विभाग खोलें", "Open department")),
        help_row("Esc", lang.pick("वापस", "Back")),
        Line::from(""),
        Line::from(Span::styled(
            lang.pick(" काम", " Actions"),
            styles::highlight_style(),
        )),
        help_row("c", lang.pick("FAQ श्रेणी बदलें", "Cycle FAQ category")),
        help_row("l", lang.pick("भाषा बदलें", "Switch language")),
        help_row("r", lang.pick("ताज़ा करें", "Refresh data")),
        help_row("q", lang.pick("बंद करें", "Quit")),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" / ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(lang.pick(" से बंद करें", " to close"), styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(help_text).block(block), area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
