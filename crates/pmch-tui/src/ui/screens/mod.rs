//! Per-screen content.

pub mod departments;
pub mod emergency;
pub mod faqs;
pub mod info;
pub mod opd;

use pmch_core::{FetchState, Language};
use ratatui::text::Line;

use super::styles;

/// Body shown in place of a list that has no data yet.
pub(crate) fn placeholder<T>(state: &FetchState<T>, lang: Language) -> Vec<Line<'static>> {
    if state.is_initial_load() {
        vec![Line::styled(
            lang.pick("लोड हो रहा है...", "Loading..."),
            styles::highlight_style(),
        )]
    } else if let Some(ref error) = state.error {
        vec![
            Line::styled(
                lang.pick("डेटा लोड नहीं हो पाया", "Failed to load data"),
                styles::error_style(),
            ),
            Line::styled(error.clone(), styles::muted_style()),
            Line::from(""),
            Line::styled(
                lang.pick("[r] दोबारा कोशिश करें", "[r] Try again"),
                styles::muted_style(),
            ),
        ]
    } else {
        vec![Line::styled(
            lang.pick("कोई जानकारी नहीं", "Nothing to show"),
            styles::muted_style(),
        )]
    }
}
