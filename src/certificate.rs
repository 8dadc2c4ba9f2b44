//! Certificate composition.
//!
//! One [`CertificateData`] is built when the assessment completes; the
//! English and Hindi panes are two projections of it. Only the Hindi pane
//! needs the transliteration service (for state and district); a failing
//! service leaves the Latin names in place.

use crate::errors::AppError;
use crate::feedback::{get_final_assessment, get_final_feedback, ScoreBand};
use crate::locale::{format_date, ISO_DATE_FORMAT};
use crate::models::{
    total_score, AnswerDetail, CertificateData, Language, UserInfo, MAX_OPTION_SCORE,
};
use crate::transliteration::{transliterate_or_keep, Transliterator};
use crate::translations::bundle;
use chrono::NaiveDate;
use serde::Serialize;

/// Builds the certificate data from the snapshots handed over by the
/// assessment step.
pub fn assemble_certificate_data(
    user: &UserInfo,
    answers: &[AnswerDetail],
    issued_on: NaiveDate,
) -> Result<CertificateData, AppError> {
    let total = total_score(answers);
    let final_feedback = get_final_feedback(total);
    let final_assessment_text = get_final_assessment(final_feedback)?;

    tracing::info!(
        "Certificate assembled for '{}': score {}, band {:?}",
        user.name,
        total,
        ScoreBand::for_score(total)
    );

    Ok(CertificateData {
        user: user.clone(),
        date: issued_on.format(ISO_DATE_FORMAT).to_string(),
        assessment_data: answers.to_vec(),
        final_assessment_text: final_assessment_text.to_string(),
    })
}

/// State and district as shown on one pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Place {
    pub state: String,
    pub district: String,
}

impl Place {
    pub fn latin(data: &CertificateData) -> Self {
        Self {
            state: data.user.state.clone(),
            district: data.user.district.clone(),
        }
    }

    /// Devanagari place names. The two lookups run concurrently and each
    /// keeps its Latin value when it fails.
    pub async fn transliterated(
        data: &CertificateData,
        transliterator: &dyn Transliterator,
    ) -> Self {
        let (state, district) = tokio::join!(
            transliterate_or_keep(transliterator, &data.user.state),
            transliterate_or_keep(transliterator, &data.user.district),
        );
        Self { state, district }
    }
}

/// One row of the per-trait listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitResult {
    pub id: u32,
    pub label: String,
    pub score: u8,
    pub max_score: u8,
    pub feedback: String,
}

/// Everything a renderer needs for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificatePane {
    pub lang: Language,
    pub title: String,
    pub presented_to: String,
    pub recipient: String,
    pub recipient_suffix: Option<String>,
    pub statement: String,
    pub detailed_results_heading: String,
    pub score_label: String,
    pub results: Vec<TraitResult>,
    /// Short band line in this pane's language.
    pub final_feedback: String,
    pub summary_heading: String,
    pub summary: String,
    pub issuing_authority_name: String,
    pub issuing_authority: String,
    pub date_of_issue_label: String,
    pub issue_date: String,
}

impl CertificatePane {
    /// Projects the certificate into `lang`.
    pub fn project(
        data: &CertificateData,
        lang: Language,
        place: &Place,
    ) -> Result<Self, AppError> {
        let t = bundle(lang);
        let labels = t.labels();

        let name = match lang {
            Language::En => &data.user.name,
            Language::Hi => &data.user.name_hi,
        };
        let recipient = t.prefixed_name(name, data.user.gender);
        let issue_date = format_date(lang, &data.date);

        let statement = match lang {
            Language::En => format!(
                "{} {} {} {}, {} {} {}.",
                labels.cert_line1_p1,
                recipient,
                labels.cert_line1_p2,
                place.district,
                place.state,
                labels.cert_line1_p3,
                issue_date
            ),
            Language::Hi => format!(
                "{} {}, {} {}, {} {} {} {}",
                labels.cert_line1_p1,
                recipient,
                labels.cert_line1_p2,
                place.district,
                place.state,
                labels.cert_line1_p3,
                issue_date,
                labels.cert_line1_p4
            ),
        };

        let results = data
            .detailed_results()
            .map(|answer| {
                let feedback = match lang {
                    Language::En => answer.feedback.clone(),
                    Language::Hi => t.feedback(answer.r#trait, answer.score)?.to_string(),
                };
                Ok(TraitResult {
                    id: answer.id,
                    label: t.trait_label(answer.r#trait).to_string(),
                    score: answer.score,
                    max_score: MAX_OPTION_SCORE,
                    feedback,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let summary = match lang {
            Language::En => data.final_assessment_text.clone(),
            Language::Hi => t.final_assessment(&data.final_assessment_text)?.to_string(),
        };

        Ok(Self {
            lang: t.language(),
            title: labels.cert_title.to_string(),
            presented_to: labels.cert_presented_to.to_string(),
            recipient,
            recipient_suffix: labels.recipient_suffix.map(str::to_string),
            statement,
            detailed_results_heading: labels.detailed_results.to_string(),
            score_label: labels.score.to_string(),
            results,
            final_feedback: t.final_feedback(data.total_score()).to_string(),
            summary_heading: labels.assessment_summary.to_string(),
            summary,
            issuing_authority_name: labels.issuing_authority_name.to_string(),
            issuing_authority: labels.issuing_authority.to_string(),
            date_of_issue_label: labels.date_of_issue.to_string(),
            issue_date,
        })
    }
}

/// Both panes plus the score summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BilingualCertificate {
    pub total_score: u32,
    pub final_feedback: String,
    pub english: CertificatePane,
    pub hindi: CertificatePane,
}

impl BilingualCertificate {
    pub fn pane(&self, lang: Language) -> &CertificatePane {
        match lang {
            Language::En => &self.english,
            Language::Hi => &self.hindi,
        }
    }
}

/// Builds the pane for one language, transliterating places only for Hindi.
pub async fn render_pane(
    data: &CertificateData,
    lang: Language,
    transliterator: &dyn Transliterator,
) -> Result<CertificatePane, AppError> {
    let place = match lang {
        Language::En => Place::latin(data),
        Language::Hi => Place::transliterated(data, transliterator).await,
    };
    CertificatePane::project(data, lang, &place)
}

pub async fn render_bilingual(
    data: &CertificateData,
    transliterator: &dyn Transliterator,
) -> Result<BilingualCertificate, AppError> {
    let total = data.total_score();
    Ok(BilingualCertificate {
        total_score: total,
        final_feedback: get_final_feedback(total).to_string(),
        english: render_pane(data, Language::En, transliterator).await?,
        hindi: render_pane(data, Language::Hi, transliterator).await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Trait};
    use async_trait::async_trait;

    struct Dictionary;

    #[async_trait]
    impl Transliterator for Dictionary {
        async fn transliterate(&self, text: &str) -> Result<String, AppError> {
            match text {
                "Madhya Pradesh" => Ok("मध्य प्रदेश".to_string()),
                "Bhopal" => Ok("भोपाल".to_string()),
                other => Err(AppError::TransliterationUnavailable(other.to_string())),
            }
        }
    }

    fn user(gender: Gender) -> UserInfo {
        UserInfo {
            name: "Asha".to_string(),
            name_hi: "आशा".to_string(),
            age: 30,
            gender,
            state: "Madhya Pradesh".to_string(),
            district: "Bhopal".to_string(),
        }
    }

    fn answers(score: u8) -> Vec<AnswerDetail> {
        crate::question_bank::QUESTIONS
            .iter()
            .map(|q| AnswerDetail {
                id: q.id,
                r#trait: q.r#trait,
                score,
                feedback: crate::feedback::get_individual_feedback(q.r#trait, score)
                    .unwrap()
                    .to_string(),
            })
            .collect()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_assemble_stores_iso_date_and_narrative() {
        let data = assemble_certificate_data(&user(Gender::Female), &answers(3), date()).unwrap();
        assert_eq!(data.date, "2024-03-15");
        assert_eq!(
            data.final_assessment_text,
            ScoreBand::StronglyFavorable.final_assessment(Language::En)
        );
        assert_eq!(data.assessment_data.len(), 10);
    }

    #[tokio::test]
    async fn test_panes_share_one_model() {
        let data = assemble_certificate_data(&user(Gender::Female), &answers(3), date()).unwrap();
        let cert = render_bilingual(&data, &Dictionary).await.unwrap();

        assert_eq!(cert.total_score, 30);
        assert_eq!(cert.english.recipient, "Ms. Asha");
        assert_eq!(cert.hindi.recipient, "सुश्री आशा");
        assert_eq!(cert.hindi.recipient_suffix.as_deref(), Some("को"));
        assert_eq!(
            cert.english.statement,
            "This is to certify that Ms. Asha from Bhopal, Madhya Pradesh has successfully completed the Aptitude Insight situational assessment on March 15, 2024."
        );
        assert!(cert.hindi.statement.contains("भोपाल, मध्य प्रदेश"));
        assert!(cert.hindi.statement.contains("१५ मार्च, २०२४"));
        assert_eq!(cert.hindi.issue_date, "१५ मार्च, २०२४");
        assert_eq!(cert.final_feedback, cert.english.final_feedback);
        assert_eq!(
            cert.hindi.final_feedback,
            ScoreBand::StronglyFavorable.final_feedback(Language::Hi)
        );
        assert_eq!(cert.english.results.len(), 9);
        assert_eq!(cert.hindi.results.len(), 9);
        assert!(cert
            .english
            .results
            .iter()
            .all(|r| r.label != Trait::Courage.as_str()));
    }

    #[tokio::test]
    async fn test_english_pane_never_transliterates() {
        let data = assemble_certificate_data(&user(Gender::Other), &answers(0), date()).unwrap();
        let pane = render_pane(&data, Language::En, &Dictionary).await.unwrap();
        assert_eq!(pane.recipient, "Asha");
        assert!(pane.statement.contains("Bhopal, Madhya Pradesh"));
    }

    #[tokio::test]
    async fn test_unknown_narrative_fails_hindi_pane() {
        let mut data =
            assemble_certificate_data(&user(Gender::Male), &answers(1), date()).unwrap();
        data.final_assessment_text = "edited by hand".to_string();
        assert!(render_pane(&data, Language::En, &Dictionary).await.is_ok());
        let err = render_pane(&data, Language::Hi, &Dictionary).await.unwrap_err();
        assert!(matches!(err, AppError::UnknownFeedbackKey(_)));
    }
}
