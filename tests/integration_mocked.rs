/// Integration tests with a mocked transliteration service
/// Exercises the HTTP client and the certificate panes without a real backend
use aptitude_insight::certificate::{assemble_certificate_data, render_bilingual, render_pane};
use aptitude_insight::errors::AppError;
use aptitude_insight::feedback::get_individual_feedback;
use aptitude_insight::models::{AnswerDetail, Gender, Language, UserInfo};
use aptitude_insight::question_bank::QUESTIONS;
use aptitude_insight::transliteration::{
    transliterate_or_keep, TransliterationClient, Transliterator, TRANSLITERATE_PATH,
};
use chrono::NaiveDate;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> TransliterationClient {
    TransliterationClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

async fn mock_word(server: &MockServer, latin: &str, devanagari: &str) {
    Mock::given(method("POST"))
        .and(path(TRANSLITERATE_PATH))
        .and(body_json(serde_json::json!({ "text": latin })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "transliteration": devanagari })),
        )
        .mount(server)
        .await;
}

fn participant() -> UserInfo {
    UserInfo {
        name: "Ravi Kumar".to_string(),
        name_hi: "रवि कुमार".to_string(),
        age: 34,
        gender: Gender::Male,
        state: "Madhya Pradesh".to_string(),
        district: "Sehore".to_string(),
    }
}

fn answers() -> Vec<AnswerDetail> {
    QUESTIONS
        .iter()
        .map(|q| AnswerDetail {
            id: q.id,
            r#trait: q.r#trait,
            score: 2,
            feedback: get_individual_feedback(q.r#trait, 2).unwrap().to_string(),
        })
        .collect()
}

#[tokio::test]
async fn test_transliteration_success() {
    let server = MockServer::start().await;
    mock_word(&server, "Bhopal", "भोपाल").await;

    let result = client(&server).transliterate("Bhopal").await.unwrap();
    assert_eq!(result, "भोपाल");
}

#[tokio::test]
async fn test_successful_results_are_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRANSLITERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "transliteration": "इंदौर" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    assert_eq!(client.transliterate("Indore").await.unwrap(), "इंदौर");
    assert_eq!(client.transliterate("Indore").await.unwrap(), "इंदौर");
}

#[tokio::test]
async fn test_server_error_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRANSLITERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client(&server).transliterate("Bhopal").await.unwrap_err();
    assert!(matches!(err, AppError::TransliterationUnavailable(_)));
}

#[tokio::test]
async fn test_unexpected_shape_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRANSLITERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": "x" })),
        )
        .mount(&server)
        .await;

    let err = client(&server).transliterate("Bhopal").await.unwrap_err();
    assert!(matches!(err, AppError::TransliterationUnavailable(_)));
}

#[tokio::test]
async fn test_empty_result_falls_back_to_latin() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRANSLITERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "transliteration": "" })),
        )
        .mount(&server)
        .await;

    let client = client(&server);
    assert_eq!(transliterate_or_keep(&client, "Sehore").await, "Sehore");
}

#[tokio::test]
async fn test_hindi_pane_keeps_latin_district_when_service_fails_for_it() {
    let server = MockServer::start().await;
    mock_word(&server, "Madhya Pradesh", "मध्य प्रदेश").await;
    Mock::given(method("POST"))
        .and(path(TRANSLITERATE_PATH))
        .and(body_json(serde_json::json!({ "text": "Sehore" })))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let data = assemble_certificate_data(&participant(), &answers(), date).unwrap();
    let client = client(&server);

    let pane = render_pane(&data, Language::Hi, &client).await.unwrap();
    assert!(pane.statement.contains("Sehore, मध्य प्रदेश"));
    assert_eq!(pane.recipient, "श्री रवि कुमार");
    assert_eq!(pane.issue_date, "१५ मार्च, २०२४");
}

#[tokio::test]
async fn test_english_pane_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let data = assemble_certificate_data(&participant(), &answers(), date).unwrap();

    let pane = render_pane(&data, Language::En, &client(&server)).await.unwrap();
    assert_eq!(pane.recipient, "Mr. Ravi Kumar");
    assert_eq!(pane.issue_date, "March 15, 2024");
}

#[tokio::test]
async fn test_bilingual_certificate_from_mocked_service() {
    let server = MockServer::start().await;
    mock_word(&server, "Madhya Pradesh", "मध्य प्रदेश").await;
    mock_word(&server, "Sehore", "सीहोर").await;

    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let data = assemble_certificate_data(&participant(), &answers(), date).unwrap();
    let cert = render_bilingual(&data, &client(&server)).await.unwrap();

    assert_eq!(cert.total_score, 20);
    assert!(cert.hindi.statement.contains("सीहोर, मध्य प्रदेश"));
    assert!(cert.english.statement.contains("Sehore, Madhya Pradesh"));
    assert_eq!(cert.english.results.len(), cert.hindi.results.len());
}
