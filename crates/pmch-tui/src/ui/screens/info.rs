//! Static campus directions and the About page.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use pmch_core::Language;

use crate::app::App;
use crate::ui::styles;

/// Which departments sit in which block, as `(hindi, english)`.
const BLOCKS: [(&str, &str); 4] = [
    (
        "ब्लॉक A: सामान्य चिकित्सा, हड्डी रोग, ब्लड बैंक (तहखाना)",
        "Block A: General Medicine, Orthopaedics, Blood Bank (Basement)",
    ),
    (
        "ब्लॉक B: हृदय रोग (पहली मंज़िल), नेत्र रोग (भूतल)",
        "Block B: Cardiology (1st Floor), Ophthalmology (Ground Floor)",
    ),
    (
        "ब्लॉक C: सर्जरी (भूतल), त्वचा रोग (पहली मंज़िल)",
        "Block C: Surgery (Ground Floor), Dermatology (1st Floor)",
    ),
    (
        "ब्लॉक D: बाल रोग (भूतल), प्रसूति एवं स्त्री रोग (दूसरी मंज़िल)",
        "Block D: Paediatrics (Ground Floor), Obs & Gynae (2nd Floor)",
    ),
];

const LANDMARKS: [(&str, &str); 5] = [
    ("🚑 इमरजेंसी: मुख्य गेट से बाईं तरफ", "🚑 Emergency: Left of main gate"),
    ("🅿 पार्किंग: मुख्य गेट के सामने", "🅿 Parking: In front of main gate"),
    ("💊 फार्मेसी: OPD बिल्डिंग के बगल में", "💊 Pharmacy: Next to OPD building"),
    ("🩸 ब्लड बैंक: ब्लॉक A, तहखाना", "🩸 Blood Bank: Block A, Basement"),
    ("📋 OPD रजिस्ट्रेशन: मुख्य गेट से सीधे", "📋 OPD Registration: Straight from main gate"),
];

const ABOUT: (&str, &str) = (
    "यह ऐप पटना मेडिकल कॉलेज अस्पताल (PMCH) के मरीज़ों और उनके परिजनों के लिए बनाई गई है। इसका उद्देश्य अस्पताल के विभागों, OPD समय, कैम्पस दिशा-निर्देश, और आपातकालीन नंबरों की जानकारी प्रदान करना है।",
    "This app is designed for patients and attendants at Patna Medical College Hospital (PMCH). It provides information about hospital departments, OPD timings, campus directions, and emergency contacts.",
);

const DISCLAIMER: [(&str, &str); 5] = [
    ("• यह कोई आधिकारिक सरकारी ऐप नहीं है।", "• This is NOT an official government app."),
    ("• यह केवल सूचना और मार्गदर्शन के लिए है।", "• It is for informational and guidance purposes only."),
    ("• इस ऐप में दी गई जानकारी बदल सकती है।", "• Information provided may be subject to change."),
    ("• किसी भी चिकित्सा निर्णय के लिए कृपया डॉक्टर से सलाह लें।", "• Please consult a doctor for any medical decisions."),
    ("• ऐप में कोई भी चिकित्सीय निदान या उपचार सुझाव नहीं दिया जाता।", "• No medical diagnosis or treatment suggestions are provided."),
];

const CONTACT_EMAIL: &str = "pmchguide@example.com";

fn pick_all(lang: Language, pairs: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    pairs
        .iter()
        .map(|&(hi, en)| Line::from(lang.pick(hi, en)))
        .collect()
}

pub fn campus_lines(lang: Language) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            lang.pick("📍 विभाग कहाँ है?", "📍 Where is each department?"),
            styles::highlight_style(),
        ),
        Line::from(""),
    ];
    lines.extend(pick_all(lang, &BLOCKS));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        lang.pick("🏁 ज़रूरी जगहें", "🏁 Important Landmarks"),
        styles::highlight_style(),
    ));
    lines.push(Line::from(""));
    lines.extend(pick_all(lang, &LANDMARKS));
    lines
}

pub fn about_lines(lang: Language) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            lang.pick("📋 ऐप के बारे में", "📋 About This App"),
            styles::highlight_style(),
        ),
        Line::from(lang.pick(ABOUT.0, ABOUT.1)),
        Line::from(""),
        Line::styled(lang.pick("⚠ अस्वीकरण", "⚠ Disclaimer"), styles::error_style()),
    ];
    lines.extend(pick_all(lang, &DISCLAIMER));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        lang.pick("📧 संपर्क", "📧 Contact"),
        styles::highlight_style(),
    ));
    lines.push(Line::from(lang.pick(
        "सुझाव या शिकायत के लिए ईमेल करें:",
        "For suggestions or complaints, email:",
    )));
    lines.push(Line::styled(CONTACT_EMAIL, styles::success_style()));
    lines
}

fn render_static(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn render_campus(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.lang();
    render_static(frame, area, lang.pick("कैम्पस दिशा-निर्देश", "Campus Directions"), campus_lines(lang));
}

pub fn render_about(frame: &mut Frame, app: &App, area: Rect) {
    let lang = app.lang();
    render_static(frame, area, lang.pick("जानकारी", "About"), about_lines(lang));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_campus_follows_language() {
        let en = text(&campus_lines(Language::English));
        assert!(en.contains("Block B: Cardiology"));
        assert!(!en.contains("ब्लॉक"));

        let hi = text(&campus_lines(Language::Hindi));
        assert!(hi.contains("ब्लॉक B"));
    }

    #[test]
    fn test_about_has_disclaimer_and_contact() {
        let en = text(&about_lines(Language::English));
        assert!(en.contains("NOT an official government app"));
        assert!(en.contains(CONTACT_EMAIL));
    }
}
