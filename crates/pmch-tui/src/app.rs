//! Application state for the PMCH terminal client.
//!
//! Each data screen owns one `CachedFetch`, started the first time the
//! screen is shown. Opening a department adds a detail fetch of its own
//! that is disposed again when the detail closes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use pmch_core::api::DEPARTMENTS_PAGE_SIZE;
use pmch_core::cache::keys;
use pmch_core::models::{Department, EmergencyContact, Faq, FaqCategory, OpdTiming};
use pmch_core::{
    producer, ApiClient, CacheManager, CachedFetch, Config, FetchState, Language,
    LanguageContext, Producer, Subscription,
};

// ============================================================================
// Constants
// ============================================================================

/// Rows moved by PageUp/PageDown.
pub const PAGE_SCROLL_SIZE: usize = 10;

// ============================================================================
// UI State Types
// ============================================================================

/// Top-level screens, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Departments,
    OpdTimings,
    Faqs,
    Emergency,
    Campus,
    About,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Departments,
        Screen::OpdTimings,
        Screen::Faqs,
        Screen::Emergency,
        Screen::Campus,
        Screen::About,
    ];

    pub fn title(&self, lang: Language) -> &'static str {
        match self {
            Screen::Departments => lang.pick("विभाग", "Departments"),
            Screen::OpdTimings => lang.pick("OPD समय", "OPD Timings"),
            Screen::Faqs => lang.pick("सवाल-जवाब", "FAQs"),
            Screen::Emergency => lang.pick("आपातकालीन", "Emergency"),
            Screen::Campus => lang.pick("कैम्पस", "Campus"),
            Screen::About => lang.pick("जानकारी", "About"),
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// `'1'` is the first screen.
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    Quitting,
}

/// What the status bar needs to know about the active fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchStatus {
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<i64>,
}

impl FetchStatus {
    fn of<T>(state: &FetchState<T>) -> Self {
        Self {
            loading: state.loading,
            error: state.error.clone(),
            last_updated: state.last_updated,
        }
    }
}

// ============================================================================
// Views
// ============================================================================

/// A `CachedFetch` whose updates mark the screen for redraw.
pub struct View<T> {
    fetch: CachedFetch<T>,
    _subscription: Subscription<T>,
}

impl<T> View<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn new(cache: &CacheManager, dirty: &Arc<AtomicBool>) -> Self {
        let fetch = CachedFetch::new(cache.clone());
        let flag = Arc::clone(dirty);
        let subscription = fetch.subscribe(move |_| flag.store(true, Ordering::Release));
        Self {
            fetch,
            _subscription: subscription,
        }
    }

    pub fn state(&self) -> FetchState<T> {
        self.fetch.state()
    }

    /// Borrow the data, if any, without cloning it.
    pub fn with_data<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        self.fetch.with_state(|s| f(s.data.as_ref()))
    }

    fn is_started(&self) -> bool {
        self.fetch.key().is_some()
    }

    fn ensure_started(&self, key: &str, producer: impl FnOnce() -> Producer<T>) {
        if !self.is_started() {
            debug!(cache = key, "Starting fetch");
            self.fetch.start(key, producer());
        }
    }

    fn refresh(&self) {
        self.fetch.refresh();
    }

    fn dispose(&self) {
        self.fetch.dispose();
    }
}

/// Detail panel for one department.
pub struct DepartmentDetail {
    pub id: i64,
    pub view: View<Department>,
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    api: ApiClient,
    cache: CacheManager,
    pub language: LanguageContext,

    // UI State
    pub state: AppState,
    pub screen: Screen,
    pub faq_category: FaqCategory,

    // Selection indices
    pub department_selection: usize,
    pub opd_selection: usize,
    pub faq_selection: usize,
    pub contact_selection: usize,

    // Data
    pub departments: View<Vec<Department>>,
    pub department_detail: Option<DepartmentDetail>,
    pub opd_timings: View<Vec<OpdTiming>>,
    pub faqs: View<Vec<Faq>>,
    pub contacts: View<Vec<EmergencyContact>>,

    dirty: Arc<AtomicBool>,
}

impl App {
    /// Build the app from configuration and start loading the first screen.
    pub async fn new(config: &Config) -> Result<Self> {
        let cache = match config.cache_dir() {
            Ok(dir) => match CacheManager::on_disk(dir) {
                Ok(cache) => cache,
                Err(e) => {
                    warn!(error = %e, "Cache directory unavailable, data will not persist");
                    CacheManager::in_memory()
                }
            },
            Err(e) => {
                warn!(error = %e, "No cache directory, data will not persist");
                CacheManager::in_memory()
            }
        };
        let api = ApiClient::from_config(config)?;
        let language = LanguageContext::load(cache.clone()).await;
        info!(api = api.base_url(), language = language.language().code(), "App ready");

        let app = Self::with_parts(api, cache, language);
        app.ensure_loaded();
        Ok(app)
    }

    pub fn with_parts(api: ApiClient, cache: CacheManager, language: LanguageContext) -> Self {
        let dirty = Arc::new(AtomicBool::new(true));
        Self {
            departments: View::new(&cache, &dirty),
            department_detail: None,
            opd_timings: View::new(&cache, &dirty),
            faqs: View::new(&cache, &dirty),
            contacts: View::new(&cache, &dirty),
            api,
            cache,
            language,
            state: AppState::Normal,
            screen: Screen::Departments,
            faq_category: FaqCategory::All,
            department_selection: 0,
            opd_selection: 0,
            faq_selection: 0,
            contact_selection: 0,
            dirty,
        }
    }

    pub fn lang(&self) -> Language {
        self.language.language()
    }

    /// Whether anything changed since the last call.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    // ===== Navigation =====

    pub fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            self.close_department();
            self.screen = screen;
            self.mark_dirty();
        }
        self.ensure_loaded();
    }

    /// Start the current screen's fetch if it has never run.
    fn ensure_loaded(&self) {
        let api = self.api.clone();
        match self.screen {
            Screen::Departments => self.departments.ensure_started(keys::DEPARTMENTS, || {
                producer(move || {
                    let api = api.clone();
                    async move { api.fetch_departments(1, DEPARTMENTS_PAGE_SIZE).await }
                })
            }),
            Screen::OpdTimings => self.opd_timings.ensure_started(keys::OPD_TIMINGS, || {
                producer(move || {
                    let api = api.clone();
                    async move { api.fetch_opd_timings().await }
                })
            }),
            Screen::Faqs => self.faqs.ensure_started(keys::FAQS, || {
                producer(move || {
                    let api = api.clone();
                    async move { api.fetch_faqs(None).await }
                })
            }),
            Screen::Emergency => self.contacts.ensure_started(keys::CONTACTS, || {
                producer(move || {
                    let api = api.clone();
                    async move { api.fetch_contacts(None).await }
                })
            }),
            Screen::Campus | Screen::About => {}
        }
    }

    /// Re-run the fetch behind whatever is on screen.
    pub fn refresh_current(&self) {
        if let Some(detail) = &self.department_detail {
            detail.view.refresh();
            return;
        }
        match self.screen {
            Screen::Departments => self.departments.refresh(),
            Screen::OpdTimings => self.opd_timings.refresh(),
            Screen::Faqs => self.faqs.refresh(),
            Screen::Emergency => self.contacts.refresh(),
            Screen::Campus | Screen::About => {}
        }
    }

    pub async fn toggle_language(&self) {
        self.language.toggle().await;
        self.mark_dirty();
    }

    // ===== Departments =====

    pub fn selected_department(&self) -> Option<Department> {
        self.departments
            .with_data(|list| list.and_then(|l| l.get(self.department_selection)).cloned())
    }

    pub fn open_selected_department(&mut self) {
        let Some(department) = self.selected_department() else {
            return;
        };
        if self.department_detail.as_ref().map(|d| d.id) == Some(department.id) {
            return;
        }
        self.close_department();

        let id = department.id;
        let view = View::new(&self.cache, &self.dirty);
        let api = self.api.clone();
        view.ensure_started(&keys::department(id), || {
            producer(move || {
                let api = api.clone();
                async move { api.fetch_department(id).await }
            })
        });
        self.department_detail = Some(DepartmentDetail { id, view });
        self.mark_dirty();
    }

    pub fn close_department(&mut self) {
        if let Some(detail) = self.department_detail.take() {
            detail.view.dispose();
            self.mark_dirty();
        }
    }

    // ===== FAQs =====

    /// FAQs in the selected category.
    pub fn filtered_faqs(&self) -> Vec<Faq> {
        self.faqs.with_data(|faqs| {
            faqs.map(|list| {
                list.iter()
                    .filter(|f| self.faq_category.matches(f))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
        })
    }

    fn filtered_faq_count(&self) -> usize {
        self.faqs.with_data(|faqs| {
            faqs.map_or(0, |list| {
                list.iter().filter(|f| self.faq_category.matches(f)).count()
            })
        })
    }

    pub fn cycle_faq_category(&mut self) {
        self.faq_category = self.faq_category.next();
        self.faq_selection = 0;
        self.mark_dirty();
    }

    // ===== Selection =====

    fn current_list_len(&self) -> usize {
        match self.screen {
            Screen::Departments => self.departments.with_data(|d| d.map_or(0, Vec::len)),
            Screen::OpdTimings => self.opd_timings.with_data(|d| d.map_or(0, Vec::len)),
            Screen::Faqs => self.filtered_faq_count(),
            Screen::Emergency => self.contacts.with_data(|d| d.map_or(0, Vec::len)),
            Screen::Campus | Screen::About => 0,
        }
    }

    fn current_selection_mut(&mut self) -> Option<&mut usize> {
        match self.screen {
            Screen::Departments => Some(&mut self.department_selection),
            Screen::OpdTimings => Some(&mut self.opd_selection),
            Screen::Faqs => Some(&mut self.faq_selection),
            Screen::Emergency => Some(&mut self.contact_selection),
            Screen::Campus | Screen::About => None,
        }
    }

    /// Move the current list's selection by `delta`, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.department_detail.is_some() {
            return;
        }
        let len = self.current_list_len();
        if let Some(selection) = self.current_selection_mut() {
            let max = len.saturating_sub(1);
            *selection = selection.saturating_add_signed(delta).min(max);
            self.mark_dirty();
        }
    }

    // ===== Status =====

    /// Fetch status for the status bar; `None` on static screens.
    pub fn status(&self) -> Option<FetchStatus> {
        if let Some(detail) = &self.department_detail {
            return Some(FetchStatus::of(&detail.view.state()));
        }
        match self.screen {
            Screen::Departments => Some(FetchStatus::of(&self.departments.state())),
            Screen::OpdTimings => Some(FetchStatus::of(&self.opd_timings.state())),
            Screen::Faqs => Some(FetchStatus::of(&self.faqs.state())),
            Screen::Emergency => Some(FetchStatus::of(&self.contacts.state())),
            Screen::Campus | Screen::About => None,
        }
    }
}
