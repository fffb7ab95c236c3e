//! Department records and the OPD-timing projection.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// A hospital department with bilingual name, description and location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Department {
    pub id: i64,
    pub name_hi: String,
    pub name_en: String,
    pub description_hi: String,
    pub description_en: String,
    pub opd_timings: String,
    pub location_text: String,
    pub location_text_hi: String,
    /// Display position; lists are sorted ascending by this.
    pub order: i32,
}

impl Department {
    pub fn name(&self, lang: Language) -> &str {
        lang.pick(&self.name_hi, &self.name_en)
    }

    pub fn description(&self, lang: Language) -> &str {
        lang.pick(&self.description_hi, &self.description_en)
    }

    pub fn location(&self, lang: Language) -> &str {
        lang.pick(&self.location_text_hi, &self.location_text)
    }

    /// Slim view used by the OPD timings listing.
    pub fn to_opd_timing(&self) -> OpdTiming {
        OpdTiming {
            id: self.id,
            name_hi: self.name_hi.clone(),
            name_en: self.name_en.clone(),
            opd_timings: self.opd_timings.clone(),
            location_text: self.location_text.clone(),
            location_text_hi: self.location_text_hi.clone(),
        }
    }
}

/// OPD-relevant subset of a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct OpdTiming {
    pub id: i64,
    pub name_hi: String,
    pub name_en: String,
    pub opd_timings: String,
    pub location_text: String,
    pub location_text_hi: String,
}

impl OpdTiming {
    pub fn name(&self, lang: Language) -> &str {
        lang.pick(&self.name_hi, &self.name_en)
    }

    pub fn location(&self, lang: Language) -> &str {
        lang.pick(&self.location_text_hi, &self.location_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardiology() -> Department {
        Department {
            id: 2,
            name_hi: "हृदय रोग विभाग".to_string(),
            name_en: "Cardiology".to_string(),
            description_hi: "दिल से संबंधित".to_string(),
            description_en: "Heart-related".to_string(),
            opd_timings: "Mon-Sat 9:00 AM - 1:00 PM".to_string(),
            location_text: "Block B, First Floor".to_string(),
            location_text_hi: "ब्लॉक B, पहली मंज़िल".to_string(),
            order: 2,
        }
    }

    #[test]
    fn test_department_wire_field_names() {
        let json = serde_json::to_value(cardiology()).unwrap();
        assert_eq!(json["nameHi"], "हृदय रोग विभाग");
        assert_eq!(json["locationTextHi"], "ब्लॉक B, पहली मंज़िल");
        assert_eq!(json["opdTimings"], "Mon-Sat 9:00 AM - 1:00 PM");
        assert_eq!(json["order"], 2);
    }

    #[test]
    fn test_department_localized_fields() {
        let dept = cardiology();
        assert_eq!(dept.name(Language::English), "Cardiology");
        assert_eq!(dept.name(Language::Hindi), "हृदय रोग विभाग");
        assert_eq!(dept.location(Language::English), "Block B, First Floor");
        assert_eq!(dept.description(Language::Hindi), "दिल से संबंधित");
    }

    #[test]
    fn test_opd_projection_drops_description_and_order() {
        let slim = cardiology().to_opd_timing();
        let json = serde_json::to_value(&slim).unwrap();
        assert!(json.get("descriptionEn").is_none());
        assert!(json.get("order").is_none());
        assert_eq!(slim.name(Language::English), "Cardiology");
    }
}
