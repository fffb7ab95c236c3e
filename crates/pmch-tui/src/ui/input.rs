//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppState, Screen, PAGE_SCROLL_SIZE};

/// Handle one key press. Returns true if the app should quit.
pub async fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::Quitting;
            return true;
        }
        KeyCode::Char('?') => app.state = AppState::ShowingHelp,

        // Screens
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(screen) = Screen::from_digit(c) {
                app.set_screen(screen);
            }
        }
        KeyCode::Tab => app.set_screen(app.screen.next()),
        KeyCode::BackTab => app.set_screen(app.screen.prev()),

        // Lists
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::PageDown => app.move_selection(PAGE_SCROLL_SIZE as isize),
        KeyCode::PageUp => app.move_selection(-(PAGE_SCROLL_SIZE as isize)),
        KeyCode::Home => app.move_selection(isize::MIN),
        KeyCode::End => app.move_selection(isize::MAX),
        KeyCode::Enter if app.screen == Screen::Departments => app.open_selected_department(),
        KeyCode::Esc => app.close_department(),

        // Actions
        KeyCode::Char('c') if app.screen == Screen::Faqs => app.cycle_faq_category(),
        KeyCode::Char('l') => app.toggle_language().await,
        KeyCode::Char('r') => app.refresh_current(),
        _ => {}
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pmch_core::models::FaqCategory;
    use pmch_core::{ApiClient, CacheManager, Language, LanguageContext};
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn app() -> App {
        let api = ApiClient::new("http://127.0.0.1:9/api", Duration::from_secs(1)).unwrap();
        let cache = CacheManager::in_memory();
        let language = LanguageContext::load(cache.clone()).await;
        App::with_parts(api, cache, language)
    }

    #[tokio::test]
    async fn test_digit_and_tab_switch_screens() {
        let mut app = app().await;
        assert!(!handle_input(&mut app, key(KeyCode::Char('4'))).await);
        assert_eq!(app.screen, Screen::Emergency);

        handle_input(&mut app, key(KeyCode::Tab)).await;
        assert_eq!(app.screen, Screen::Campus);

        handle_input(&mut app, key(KeyCode::BackTab)).await;
        handle_input(&mut app, key(KeyCode::BackTab)).await;
        assert_eq!(app.screen, Screen::Faqs);

        handle_input(&mut app, key(KeyCode::Char('9'))).await;
        assert_eq!(app.screen, Screen::Faqs);
    }

    #[tokio::test]
    async fn test_category_key_only_on_faqs() {
        let mut app = app().await;
        handle_input(&mut app, key(KeyCode::Char('c'))).await;
        assert_eq!(app.faq_category, FaqCategory::All);

        handle_input(&mut app, key(KeyCode::Char('3'))).await;
        handle_input(&mut app, key(KeyCode::Char('c'))).await;
        assert_eq!(app.faq_category, FaqCategory::General);
    }

    #[tokio::test]
    async fn test_language_toggle() {
        let mut app = app().await;
        handle_input(&mut app, key(KeyCode::Char('l'))).await;
        assert_eq!(app.lang(), Language::English);
    }

    #[tokio::test]
    async fn test_help_overlay_swallows_keys() {
        let mut app = app().await;
        handle_input(&mut app, key(KeyCode::Char('?'))).await;
        assert_eq!(app.state, AppState::ShowingHelp);

        handle_input(&mut app, key(KeyCode::Char('2'))).await;
        assert_eq!(app.screen, Screen::Departments);

        // q closes the overlay rather than quitting
        assert!(!handle_input(&mut app, key(KeyCode::Char('q'))).await);
        assert_eq!(app.state, AppState::Normal);
        assert!(handle_input(&mut app, key(KeyCode::Char('q'))).await);
    }
}
