use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Assessment Models ============

/// Dispositional category measured by a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trait {
    Empathy,
    Decisiveness,
    Resilience,
    Courage,
    Integrity,
    Teamwork,
    Adaptability,
    Responsibility,
    Patience,
    Leadership,
}

impl Trait {
    /// Every trait, in declaration order.
    pub const ALL: [Trait; 10] = [
        Trait::Empathy,
        Trait::Decisiveness,
        Trait::Resilience,
        Trait::Courage,
        Trait::Integrity,
        Trait::Teamwork,
        Trait::Adaptability,
        Trait::Responsibility,
        Trait::Patience,
        Trait::Leadership,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Trait::Empathy => "Empathy",
            Trait::Decisiveness => "Decisiveness",
            Trait::Resilience => "Resilience",
            Trait::Courage => "Courage",
            Trait::Integrity => "Integrity",
            Trait::Teamwork => "Teamwork",
            Trait::Adaptability => "Adaptability",
            Trait::Responsibility => "Responsibility",
            Trait::Patience => "Patience",
            Trait::Leadership => "Leadership",
        }
    }

    /// Courage counts towards the total score but is left out of the
    /// per-trait listing on the certificate.
    pub fn is_listed_on_certificate(self) -> bool {
        self != Trait::Courage
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest score a single option can carry.
pub const MAX_OPTION_SCORE: u8 = 3;

/// One selectable answer of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub score: u8,
    pub text: &'static str,
}

/// A situational question from the static question bank.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub r#trait: Trait,
    pub question_text: &'static str,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn offers_score(&self, score: u8) -> bool {
        self.options.iter().any(|o| o.score == score)
    }

    pub fn max_score(&self) -> u8 {
        self.options.iter().map(|o| o.score).max().unwrap_or(0)
    }
}

/// Recorded answer to one question, appended in question order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerDetail {
    pub id: u32,
    pub r#trait: Trait,
    pub score: u8,
    pub feedback: String,
}

/// Sum of the scores of a completed run.
pub fn total_score(answers: &[AnswerDetail]) -> u32 {
    answers.iter().map(|a| u32::from(a.score)).sum()
}

// ============ Participant Models ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Other,
        Gender::PreferNotToSay,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value.trim())
    }
}

/// Validated participant details. Built once by the info step and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub name_hi: String,
    pub age: u8,
    pub gender: Gender,
    pub state: String,
    pub district: String,
}

/// Raw form submission, validated into a [`UserInfo`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInfoForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_hi: String,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
}

// ============ Certificate Models ============

/// Everything a certificate is rendered from. This is the JSON persisted
/// under [`crate::storage::CERTIFICATE_STORAGE_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateData {
    #[serde(flatten)]
    pub user: UserInfo,
    pub date: String,
    pub assessment_data: Vec<AnswerDetail>,
    pub final_assessment_text: String,
}

impl CertificateData {
    pub fn total_score(&self) -> u32 {
        total_score(&self.assessment_data)
    }

    /// Answers shown in the per-trait listing, in question order.
    pub fn detailed_results(&self) -> impl Iterator<Item = &AnswerDetail> {
        self.assessment_data
            .iter()
            .filter(|a| a.r#trait.is_listed_on_certificate())
    }
}

/// Certificate language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}
