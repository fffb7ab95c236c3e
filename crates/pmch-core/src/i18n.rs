//! Hindi/English language selection.
//!
//! Every record carries both text variants, so switching language never
//! triggers a fetch: `Language::pick` just chooses which field to render.
//! The preference itself lives in a [`LanguageContext`] that is loaded once
//! at startup and handed to whatever renders text.

use std::fmt;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cache::{keys, CacheManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub enum Language {
    /// Target users are Hindi-first.
    #[default]
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Select the variant of a bilingual field pair.
    pub fn pick<'a>(self, hi: &'a str, en: &'a str) -> &'a str {
        match self {
            Language::Hindi => hi,
            Language::English => en,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "hi" => Some(Language::Hindi),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Hindi => Language::English,
            Language::English => Language::Hindi,
        }
    }

    pub fn is_hindi(self) -> bool {
        self == Language::Hindi
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::Hindi => "हिंदी",
            Language::English => "English",
        })
    }
}

/// Current language plus its setter.
///
/// Cheap to clone; clones share the same preference.
#[derive(Clone)]
pub struct LanguageContext {
    current: Arc<RwLock<Language>>,
    cache: CacheManager,
}

impl LanguageContext {
    /// Load the saved preference, falling back to Hindi when it is missing,
    /// unreadable or not a known language code.
    pub async fn load(cache: CacheManager) -> Self {
        let language = cache
            .load_preference(keys::LANGUAGE)
            .await
            .and_then(|code| Language::from_code(code.trim()))
            .unwrap_or_default();
        debug!(language = language.code(), "Language preference loaded");

        Self {
            current: Arc::new(RwLock::new(language)),
            cache,
        }
    }

    pub fn language(&self) -> Language {
        match self.current.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn is_hindi(&self) -> bool {
        self.language().is_hindi()
    }

    /// Returns the Hindi or English text based on the current language.
    pub fn t<'a>(&self, hi: &'a str, en: &'a str) -> &'a str {
        self.language().pick(hi, en)
    }

    /// Switch language immediately and persist the choice. A failed write
    /// is logged by the cache layer and otherwise ignored.
    pub async fn set_language(&self, language: Language) {
        match self.current.write() {
            Ok(mut guard) => *guard = language,
            Err(poisoned) => *poisoned.into_inner() = language,
        }
        info!(language = language.code(), "Language changed");
        self.cache
            .save_preference(keys::LANGUAGE, language.code())
            .await;
    }

    pub async fn toggle(&self) -> Language {
        let next = self.language().toggled();
        self.set_language(next).await;
        next
    }
}
