/// End-to-end runs of the step flow: personal information, ten questions,
/// results and the bilingual certificate.
use aptitude_insight::certificate::render_bilingual;
use aptitude_insight::errors::AppError;
use aptitude_insight::feedback::{get_individual_feedback, ScoreBand};
use aptitude_insight::locale::{format_date_english, format_date_hindi};
use aptitude_insight::models::{CertificateData, Language, Trait, UserInfoForm};
use aptitude_insight::step_controller::{Step, StepController, StepOutcome};
use aptitude_insight::transliteration::Transliterator;
use aptitude_insight::validation::validate_user_info;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// Service that is always down; panes must fall back to Latin names.
struct Offline;

#[async_trait]
impl Transliterator for Offline {
    async fn transliterate(&self, text: &str) -> Result<String, AppError> {
        Err(AppError::TransliterationUnavailable(format!("offline: {}", text)))
    }
}

fn asha() -> UserInfoForm {
    UserInfoForm {
        name: "  Asha ".to_string(),
        name_hi: "आशा".to_string(),
        age: Some(30),
        gender: Some("Female".to_string()),
        state: Some("Madhya Pradesh".to_string()),
        district: Some("Bhopal".to_string()),
    }
}

fn issued_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// Runs the whole flow, answering question `i` with `score(i)`.
fn run(score: impl Fn(usize) -> u8) -> (StepController, Arc<CertificateData>) {
    let user = validate_user_info(&asha()).unwrap();
    let mut controller = StepController::default();
    controller.submit_info(user).unwrap();

    let mut i = 0;
    loop {
        controller.select_option(score(i)).unwrap();
        i += 1;
        if let StepOutcome::Completed(certificate) = controller.advance(issued_on()).unwrap() {
            return (controller, certificate);
        }
    }
}

#[tokio::test]
async fn test_all_top_answers() {
    let (controller, data) = run(|_| 3);
    assert_eq!(controller.step(), Step::Results);
    assert_eq!(data.user.name, "Asha");
    assert_eq!(data.total_score(), 30);

    let cert = render_bilingual(&data, &Offline).await.unwrap();
    assert_eq!(
        cert.final_feedback,
        ScoreBand::StronglyFavorable.final_feedback(Language::En)
    );
    assert!(cert.english.recipient.starts_with("Ms. "));
    assert!(cert.hindi.recipient.starts_with("सुश्री "));
    assert_eq!(
        cert.hindi.summary,
        ScoreBand::StronglyFavorable.final_assessment(Language::Hi)
    );
}

#[tokio::test]
async fn test_all_bottom_answers() {
    let (_, data) = run(|_| 0);
    assert_eq!(data.total_score(), 0);

    let cert = render_bilingual(&data, &Offline).await.unwrap();
    assert_eq!(
        cert.english.summary,
        ScoreBand::NeedsGrowth.final_assessment(Language::En)
    );
    assert_eq!(
        cert.hindi.summary,
        ScoreBand::NeedsGrowth.final_assessment(Language::Hi)
    );
    assert_eq!(
        cert.english.final_feedback,
        ScoreBand::NeedsGrowth.final_feedback(Language::En)
    );
    assert_eq!(
        cert.hindi.final_feedback,
        ScoreBand::NeedsGrowth.final_feedback(Language::Hi)
    );

    let listed: Vec<u32> = cert.english.results.iter().map(|r| r.id).collect();
    let expected: Vec<u32> = data
        .assessment_data
        .iter()
        .filter(|a| a.r#trait != Trait::Courage)
        .map(|a| a.id)
        .collect();
    assert_eq!(listed, expected);
    assert!(cert.english.results.iter().all(|r| r.score == 0));
    // Offline service: places stay in Latin script on the Hindi pane.
    assert!(cert.hindi.statement.contains("Bhopal, Madhya Pradesh"));
}

#[tokio::test]
async fn test_mixed_answers_keep_exact_feedback() {
    let scores = [3, 1, 2, 0, 2, 1, 3, 2, 1, 2];
    let (_, data) = run(|i| scores[i]);

    assert_eq!(data.total_score(), 17);
    for answer in &data.assessment_data {
        assert_eq!(
            answer.feedback,
            get_individual_feedback(answer.r#trait, answer.score).unwrap()
        );
    }
    assert_eq!(
        data.final_assessment_text,
        ScoreBand::Favorable.final_assessment(Language::En)
    );

    let cert = render_bilingual(&data, &Offline).await.unwrap();
    for result in &cert.english.results {
        let answer = data
            .assessment_data
            .iter()
            .find(|a| a.id == result.id)
            .unwrap();
        assert_eq!(result.feedback, answer.feedback);
    }
}

#[test]
fn test_advance_without_selection() {
    let mut controller = StepController::default();
    controller
        .submit_info(validate_user_info(&asha()).unwrap())
        .unwrap();
    controller.select_option(2).unwrap();
    controller.advance(issued_on()).unwrap();

    let before = controller.engine().unwrap().index();
    let err = controller.advance(issued_on()).unwrap_err();
    assert!(matches!(err, AppError::NoSelection));
    assert_eq!(err.to_string(), "Please select an answer before proceeding.");
    assert_eq!(controller.engine().unwrap().index(), before);
    assert_eq!(controller.step(), Step::Assessment);
}

#[test]
fn test_issue_date_in_both_languages() {
    assert_eq!(format_date_english("2024-03-15"), "March 15, 2024");
    assert_eq!(format_date_hindi("2024-03-15"), "१५ मार्च, २०२४");
}
