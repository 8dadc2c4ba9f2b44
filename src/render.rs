//! Printable HTML for certificates: A4 portrait, one page per pane.

use crate::certificate::{BilingualCertificate, CertificatePane};
use crate::models::Language;
use serde::Deserialize;
use std::fmt::Write;

/// Which panes go to the printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PrintMode {
    /// English page followed by the Hindi page.
    #[default]
    All,
    En,
    Hi,
}

impl PrintMode {
    pub fn languages(self) -> &'static [Language] {
        match self {
            PrintMode::All => &[Language::En, Language::Hi],
            PrintMode::En => &[Language::En],
            PrintMode::Hi => &[Language::Hi],
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(PrintMode::All),
            "en" => Some(PrintMode::En),
            "hi" => Some(PrintMode::Hi),
            _ => None,
        }
    }
}

const PRINT_CSS: &str = r#"
@page { size: A4 portrait; margin: 0; }
body { margin: 0; font-family: "Noto Sans", "Noto Sans Devanagari", sans-serif; }
.cert-page { box-sizing: border-box; width: 210mm; min-height: 297mm; padding: 20mm; page-break-inside: avoid; }
.cert-page + .cert-page { page-break-before: always; }
.cert-border { border: 12px solid hsl(40, 100%, 60%); padding: 12mm; min-height: 240mm; display: flex; flex-direction: column; justify-content: space-between; }
.cert-title { text-align: center; }
.cert-title h1 { color: hsl(40, 100%, 45%); }
.result { border-left: 4px solid hsl(40, 100%, 60%); padding-left: 8px; margin-bottom: 8px; }
.result .feedback { font-style: italic; }
.cert-footer { display: flex; justify-content: space-between; text-align: center; }
"#;

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders one pane as a `cert-page` section.
pub fn render_pane_html(pane: &CertificatePane) -> String {
    let mut html = String::new();
    let lang = pane.lang.code();

    let recipient = match &pane.recipient_suffix {
        Some(suffix) => format!(
            "{} <span class=\"cert-ko\">{}</span>",
            escape_html(&pane.recipient),
            escape_html(suffix)
        ),
        None => escape_html(&pane.recipient),
    };

    // Hindi puts the addressee above the "presented to" line.
    let (before, after) = match pane.lang {
        Language::Hi => (format!("<h2>{}</h2>", recipient), String::new()),
        Language::En => (String::new(), format!("<h2>{}</h2>", recipient)),
    };

    let _ = write!(
        html,
        "<section class=\"cert-page cert-{lang}\" lang=\"{lang}\"><div class=\"cert-border\">\
         <div class=\"cert-title\"><h1>{title}</h1>{before}<p>{presented}</p>{after}</div>\
         <main><p>{statement}</p><h3>{heading}</h3>",
        lang = lang,
        title = escape_html(&pane.title),
        before = before,
        presented = escape_html(&pane.presented_to),
        after = after,
        statement = escape_html(&pane.statement),
        heading = escape_html(&pane.detailed_results_heading),
    );

    for result in &pane.results {
        let _ = write!(
            html,
            "<div class=\"result\"><p><strong>{}:</strong> {} {}/{}</p><p class=\"feedback\">\"{}\"</p></div>",
            escape_html(&result.label),
            escape_html(&pane.score_label),
            result.score,
            result.max_score,
            escape_html(&result.feedback),
        );
    }

    let _ = write!(
        html,
        "<p class=\"final-feedback\">{}</p>\
         <p class=\"assessment-summary\"><strong>{}:</strong> {}</p></main>\
         <footer class=\"cert-footer\"><div><p><strong>{}</strong></p><p>{}</p></div>\
         <div><p><strong>{}</strong></p><p>{}</p></div></footer></div></section>",
        escape_html(&pane.final_feedback),
        escape_html(&pane.summary_heading),
        escape_html(&pane.summary),
        escape_html(&pane.issuing_authority_name),
        escape_html(&pane.issuing_authority),
        escape_html(&pane.issue_date),
        escape_html(&pane.date_of_issue_label),
    );

    html
}

/// Full printable document for the given mode.
pub fn render_document(certificate: &BilingualCertificate, mode: PrintMode) -> String {
    let pages: String = mode
        .languages()
        .iter()
        .map(|lang| render_pane_html(certificate.pane(*lang)))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body class=\"print-mode-{}\">\n{}\n</body>\n</html>\n",
        escape_html(&certificate.english.title),
        PRINT_CSS,
        match mode {
            PrintMode::All => "all",
            PrintMode::En => "en",
            PrintMode::Hi => "hi",
        },
        pages
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_print_mode_parse() {
        assert_eq!(PrintMode::parse("ALL"), Some(PrintMode::All));
        assert_eq!(PrintMode::parse("hi"), Some(PrintMode::Hi));
        assert_eq!(PrintMode::parse("fr"), None);
        assert_eq!(PrintMode::All.languages(), &[Language::En, Language::Hi]);
    }

    #[test]
    fn test_print_mode_command_line_names() {
        use clap::ValueEnum;
        for mode in PrintMode::value_variants() {
            let name = mode.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(PrintMode::parse(&name), Some(*mode));
        }
    }
}
