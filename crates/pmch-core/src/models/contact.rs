use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Kind of emergency number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub enum ContactType {
    Ambulance,
    Emergency,
    Helpdesk,
}

impl ContactType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Ambulance => "AMBULANCE",
            ContactType::Emergency => "EMERGENCY",
            ContactType::Helpdesk => "HELPDESK",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            ContactType::Ambulance => lang.pick("एंबुलेंस", "Ambulance"),
            ContactType::Emergency => lang.pick("आपातकालीन", "Emergency"),
            ContactType::Helpdesk => lang.pick("हेल्पडेस्क", "Helpdesk"),
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactType {
    type Err = String;

    /// Exact match on the wire spelling; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AMBULANCE" => Ok(ContactType::Ambulance),
            "EMERGENCY" => Ok(ContactType::Emergency),
            "HELPDESK" => Ok(ContactType::Helpdesk),
            other => Err(format!("unknown contact type: {}", other)),
        }
    }
}

/// An emergency phone number. `name` is English, `name_hi` Hindi.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct EmergencyContact {
    pub id: i64,
    pub name: String,
    pub name_hi: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
}

impl EmergencyContact {
    pub fn display_name(&self, lang: Language) -> &str {
        lang.pick(&self.name_hi, &self.name)
    }
}
