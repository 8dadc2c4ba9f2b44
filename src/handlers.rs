use crate::certificate::{render_bilingual, BilingualCertificate};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{Language, Question, UserInfoForm, MAX_OPTION_SCORE};
use crate::regions::{self, DEFAULT_STATE};
use crate::render::{render_document, PrintMode};
use crate::step_controller::{Step, StepController, StepOutcome};
use crate::storage::{persist_certificate, JsonFileStore};
use crate::translations::bundle;
use crate::transliteration::{TransliterationRequest, TransliterationResponse, Transliterator};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::limit::RequestBodyLimitLayer;
use uuid::Uuid;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

pub type Session = Arc<Mutex<StepController>>;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Transliteration service (HTTP client in production).
    pub transliterator: Arc<dyn Transliterator>,
    /// Where the latest certificate is persisted.
    pub store: Arc<JsonFileStore>,
    /// One step controller per participant, dropped after `SESSION_TTL_SECS`
    /// without a read or write.
    pub sessions: Cache<Uuid, Session>,
}

impl AppState {
    pub fn new(
        config: Config,
        transliterator: Arc<dyn Transliterator>,
        store: Arc<JsonFileStore>,
    ) -> Self {
        let sessions = Cache::builder()
            .time_to_idle(config.session_ttl())
            .max_capacity(10_000)
            .build();
        Self {
            config,
            transliterator,
            store,
            sessions,
        }
    }

    async fn session(&self, id: Uuid) -> Result<Session, AppError> {
        self.sessions
            .get(&id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Session {} not found", id)))
    }
}

/// The question currently on screen.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub index: usize,
    pub total: usize,
    pub progress_percent: f64,
    pub advance_label: &'static str,
    pub question: &'static Question,
    pub selected: Option<u8>,
    pub feedback: Option<&'static str>,
}

/// What the client should show for a session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepView {
    pub step: Step,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_feedback: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_feedback_hi: Option<&'static str>,
}

impl StepView {
    pub fn of(controller: &StepController) -> Self {
        let current = controller.engine().and_then(|engine| {
            engine.current_question().map(|question| QuestionView {
                index: engine.index(),
                total: engine.question_count(),
                progress_percent: engine.progress_percent(),
                advance_label: engine.advance_label(),
                question,
                selected: engine.selected(),
                feedback: engine.current_feedback(),
            })
        });
        let summary = controller.results_summary();
        let max_score = controller
            .answers()
            .map(|answers| answers.len() as u32 * MAX_OPTION_SCORE as u32);

        Self {
            step: controller.step(),
            current,
            total_score: summary.map(|(total, _)| total),
            max_score,
            final_feedback: summary.map(|(_, feedback)| feedback),
            final_feedback_hi: summary
                .map(|(total, _)| bundle(Language::Hi).final_feedback(total)),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub view: StepView,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub score: u8,
}

#[derive(Debug, Serialize)]
pub struct SelectResponse {
    pub score: u8,
    pub feedback: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct PrintQuery {
    #[serde(default)]
    pub mode: PrintMode,
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "aptitude-insight",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /api/v1/regions
pub async fn list_regions() -> Json<serde_json::Value> {
    Json(json!({
        "defaultState": DEFAULT_STATE,
        "states": regions::states().collect::<Vec<_>>(),
    }))
}

/// GET /api/v1/regions/:state/districts
pub async fn list_districts(
    Path(state): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let entry = regions::find_state(&state)
        .ok_or_else(|| AppError::NotFound(format!("Unknown state/UT '{}'", state)))?;
    Ok(Json(json!({
        "state": entry.state,
        "districts": entry.districts,
    })))
}

/// POST /api/v1/transliterate
///
/// Proxies the transliteration service so browsers never call it directly.
/// Failures are reported as 502; the caller keeps its Latin text.
pub async fn transliterate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TransliterationRequest>,
) -> Result<Json<TransliterationResponse>, AppError> {
    if payload.text.trim().is_empty() {
        return Err(AppError::BadRequest("text is required".to_string()));
    }
    let transliteration = state.transliterator.transliterate(&payload.text).await?;
    Ok(Json(TransliterationResponse { transliteration }))
}

/// POST /api/v1/sessions
///
/// Validates the personal information and opens a session on the first
/// question.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(form): Json<UserInfoForm>,
) -> Result<(StatusCode, Json<SessionCreated>), AppError> {
    let user = crate::validation::validate_user_info(&form)?;

    let mut controller = StepController::default();
    controller.submit_info(user)?;

    let session_id = Uuid::new_v4();
    let view = StepView::of(&controller);
    state
        .sessions
        .insert(session_id, Arc::new(Mutex::new(controller)))
        .await;

    tracing::info!("Session {} started", session_id);
    Ok((StatusCode::CREATED, Json(SessionCreated { session_id, view })))
}

/// GET /api/v1/sessions/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<StepView>, AppError> {
    let session = state.session(id).await?;
    let controller = session.lock().await;
    Ok(Json(StepView::of(&controller)))
}

/// POST /api/v1/sessions/:id/select
pub async fn select_option(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SelectRequest>,
) -> Result<Json<SelectResponse>, AppError> {
    let session = state.session(id).await?;
    let feedback = session.lock().await.select_option(payload.score)?;
    Ok(Json(SelectResponse {
        score: payload.score,
        feedback,
    }))
}

/// POST /api/v1/sessions/:id/advance
///
/// Records the selected answer. After the last question the session moves
/// to results and the certificate is saved; a failing save is only logged.
pub async fn advance(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<StepView>, AppError> {
    let session = state.session(id).await?;
    let (outcome, view) = {
        let mut controller = session.lock().await;
        let outcome = controller.advance(state.config.issue_date())?;
        (outcome, StepView::of(&controller))
    };

    if let StepOutcome::Completed(certificate) = outcome {
        tracing::info!(
            "Session {} completed with score {}",
            id,
            certificate.total_score()
        );
        persist_certificate(&state.store, &certificate).await;
    }

    Ok(Json(view))
}

async fn bilingual_for(state: &AppState, id: Uuid) -> Result<BilingualCertificate, AppError> {
    let session = state.session(id).await?;
    let certificate = session
        .lock()
        .await
        .certificate()
        .cloned()
        .ok_or_else(|| {
            AppError::InvalidTransition("Assessment is not complete yet".to_string())
        })?;
    render_bilingual(&certificate, state.transliterator.as_ref()).await
}

/// GET /api/v1/sessions/:id/certificate
pub async fn get_certificate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<BilingualCertificate>, AppError> {
    Ok(Json(bilingual_for(&state, id).await?))
}

/// GET /api/v1/sessions/:id/certificate/print?mode=all|en|hi
pub async fn print_certificate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<PrintQuery>,
) -> Result<Html<String>, AppError> {
    let certificate = bilingual_for(&state, id).await?;
    Ok(Html(render_document(&certificate, query.mode)))
}

/// Routes under `/api/v1`, without rate limiting.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/regions", get(list_regions))
        .route("/api/v1/regions/:state/districts", get(list_districts))
        .route("/api/v1/transliterate", post(transliterate))
        .route("/api/v1/sessions", post(create_session))
        .route("/api/v1/sessions/:id", get(get_session))
        .route("/api/v1/sessions/:id/select", post(select_option))
        .route("/api/v1/sessions/:id/advance", post(advance))
        .route("/api/v1/sessions/:id/certificate", get(get_certificate))
        .route(
            "/api/v1/sessions/:id/certificate/print",
            get(print_certificate),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}

/// Full application router without the per-IP rate limiter.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(api_routes())
        .with_state(state)
}
