use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// A frequently asked question with its answer in both languages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Faq {
    pub id: i64,
    pub question_hi: String,
    pub question_en: String,
    pub answer_hi: String,
    pub answer_en: String,
    pub category: String,
}

impl Faq {
    pub fn question(&self, lang: Language) -> &str {
        lang.pick(&self.question_hi, &self.question_en)
    }

    pub fn answer(&self, lang: Language) -> &str {
        lang.pick(&self.answer_hi, &self.answer_en)
    }
}

/// Category tabs shown above the FAQ list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaqCategory {
    #[default]
    All,
    General,
    Opd,
    Admission,
    Emergency,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 5] = [
        FaqCategory::All,
        FaqCategory::General,
        FaqCategory::Opd,
        FaqCategory::Admission,
        FaqCategory::Emergency,
    ];

    /// Value of `Faq::category` this tab matches, `None` for the catch-all tab.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            FaqCategory::All => None,
            FaqCategory::General => Some("general"),
            FaqCategory::Opd => Some("opd"),
            FaqCategory::Admission => Some("admission"),
            FaqCategory::Emergency => Some("emergency"),
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            FaqCategory::All => lang.pick("सभी", "All"),
            FaqCategory::General => lang.pick("सामान्य", "General"),
            FaqCategory::Opd => "OPD",
            FaqCategory::Admission => lang.pick("भर्ती", "Admission"),
            FaqCategory::Emergency => lang.pick("आपातकालीन", "Emergency"),
        }
    }

    pub fn matches(&self, faq: &Faq) -> bool {
        self.key().map_or(true, |key| faq.category == key)
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}
