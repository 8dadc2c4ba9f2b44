//! Per-language certificate bundle: static labels, trait labels, the
//! per-answer feedback table and the final assessment lookup.

use crate::errors::AppError;
use crate::feedback::{self, ScoreBand};
use crate::models::{Gender, Language, Trait};

/// Static certificate labels for one language.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub cert_title: &'static str,
    pub cert_presented_to: &'static str,
    pub cert_line1_p1: &'static str,
    pub cert_line1_p2: &'static str,
    pub cert_line1_p3: &'static str,
    pub cert_line1_p4: &'static str,
    /// Postposition printed after the recipient's name in the title block.
    pub recipient_suffix: Option<&'static str>,
    pub detailed_results: &'static str,
    pub score: &'static str,
    pub assessment_summary: &'static str,
    pub issuing_authority_name: &'static str,
    pub issuing_authority: &'static str,
    pub date_of_issue: &'static str,
}

const ENGLISH: Labels = Labels {
    cert_title: "Certificate of Aptitude Insight",
    cert_presented_to: "This certificate is proudly presented to",
    cert_line1_p1: "This is to certify that",
    cert_line1_p2: "from",
    cert_line1_p3: "has successfully completed the Aptitude Insight situational assessment on",
    cert_line1_p4: "",
    recipient_suffix: None,
    detailed_results: "Detailed Results",
    score: "Score",
    assessment_summary: "Assessment Summary",
    issuing_authority_name: "Anandak",
    issuing_authority: "Issuing Authority",
    date_of_issue: "Date of Issue",
};

const HINDI: Labels = Labels {
    cert_title: "एप्टीट्यूड इनसाइट प्रमाण पत्र",
    cert_presented_to: "यह प्रमाण पत्र गर्वपूर्वक प्रदान किया जाता है",
    cert_line1_p1: "यह प्रमाणित किया जाता है कि",
    cert_line1_p2: "निवासी",
    cert_line1_p3: "ने",
    cert_line1_p4: "को एप्टीट्यूड इनसाइट परिस्थितिजन्य मूल्यांकन सफलतापूर्वक पूरा किया।",
    recipient_suffix: Some("को"),
    detailed_results: "विस्तृत परिणाम",
    score: "अंक",
    assessment_summary: "मूल्यांकन सारांश",
    issuing_authority_name: "आनंदक",
    issuing_authority: "जारीकर्ता प्राधिकारी",
    date_of_issue: "जारी करने की तिथि",
};

/// Translation bundle for one language.
#[derive(Debug, Clone, Copy)]
pub struct Bundle {
    lang: Language,
    labels: &'static Labels,
}

pub fn bundle(lang: Language) -> Bundle {
    let labels = match lang {
        Language::En => &ENGLISH,
        Language::Hi => &HINDI,
    };
    Bundle { lang, labels }
}

impl Bundle {
    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    pub fn trait_label(&self, r#trait: Trait) -> &'static str {
        match self.lang {
            Language::En => r#trait.as_str(),
            Language::Hi => match r#trait {
                Trait::Empathy => "सहानुभूति",
                Trait::Decisiveness => "निर्णायकता",
                Trait::Resilience => "लचीलापन",
                Trait::Courage => "साहस",
                Trait::Integrity => "ईमानदारी",
                Trait::Teamwork => "टीम भावना",
                Trait::Adaptability => "अनुकूलनशीलता",
                Trait::Responsibility => "ज़िम्मेदारी",
                Trait::Patience => "धैर्य",
                Trait::Leadership => "नेतृत्व",
            },
        }
    }

    pub fn feedback(&self, r#trait: Trait, score: u8) -> Result<&'static str, AppError> {
        feedback::feedback_for(self.lang, r#trait, score)
    }

    /// Short result line for a total score.
    pub fn final_feedback(&self, total_score: u32) -> &'static str {
        ScoreBand::for_score(total_score).final_feedback(self.lang)
    }

    /// Localized narrative for a stored English final assessment text.
    pub fn final_assessment(&self, english_text: &str) -> Result<&'static str, AppError> {
        feedback::localized_final_assessment(self.lang, english_text)
    }

    pub fn honorific(&self, gender: Gender) -> Option<&'static str> {
        match (gender, self.lang) {
            (Gender::Male, Language::En) => Some("Mr."),
            (Gender::Female, Language::En) => Some("Ms."),
            (Gender::Male, Language::Hi) => Some("श्री"),
            (Gender::Female, Language::Hi) => Some("सुश्री"),
            (Gender::Other | Gender::PreferNotToSay, _) => None,
        }
    }

    /// Name with the gendered honorific, or the bare name when the gender
    /// carries none.
    pub fn prefixed_name(&self, name: &str, gender: Gender) -> String {
        match self.honorific(gender) {
            Some(prefix) => format!("{} {}", prefix, name),
            None => name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honorifics() {
        let en = bundle(Language::En);
        let hi = bundle(Language::Hi);
        assert_eq!(en.prefixed_name("Asha", Gender::Female), "Ms. Asha");
        assert_eq!(en.prefixed_name("Ravi", Gender::Male), "Mr. Ravi");
        assert_eq!(hi.prefixed_name("आशा", Gender::Female), "सुश्री आशा");
        assert_eq!(hi.prefixed_name("रवि", Gender::Male), "श्री रवि");
        for gender in [Gender::Other, Gender::PreferNotToSay] {
            assert_eq!(en.prefixed_name("Sam", gender), "Sam");
            assert_eq!(hi.prefixed_name("सैम", gender), "सैम");
        }
    }

    #[test]
    fn test_every_trait_has_a_label() {
        for lang in [Language::En, Language::Hi] {
            let b = bundle(lang);
            for t in Trait::ALL {
                assert!(!b.trait_label(t).is_empty());
            }
        }
    }

    #[test]
    fn test_final_feedback_follows_bundle_language() {
        let hi = bundle(Language::Hi);
        assert_eq!(hi.language(), Language::Hi);
        assert_eq!(
            hi.final_feedback(0),
            ScoreBand::NeedsGrowth.final_feedback(Language::Hi)
        );
        assert_eq!(
            bundle(Language::En).final_feedback(30),
            feedback::get_final_feedback(30)
        );
        assert_ne!(hi.final_feedback(30), bundle(Language::En).final_feedback(30));
    }
}
