//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification. Every view is a projection of
//! the shared `AppState`; none of the routes carry an authentication gate.

use crate::web::state::{AppState, FactState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stellar_voyage_core::catalog::CatalogError;
use stellar_voyage_core::domain::{Planet, QuizScore};
use stellar_voyage_core::orbit;
use stellar_voyage_core::quiz::{QuizPhase, QuizSession};
use tracing::{error, warn};
use utoipa::{OpenApi, ToSchema};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        list_planets_handler,
        update_planet_handler,
        delete_planet_handler,
        system_view_handler,
        set_orbiting_handler,
        quiz_view_handler,
        start_quiz_handler,
        select_option_handler,
        advance_quiz_handler,
        reset_quiz_handler,
        list_scores_handler,
        open_fact_handler,
        fact_panel_handler,
        close_fact_handler,
    ),
    components(
        schemas(
            PlanetResponse,
            PlanetPayload,
            SystemViewResponse,
            OrbitMarkerResponse,
            SetOrbitingRequest,
            QuizViewResponse,
            QuestionResponse,
            StartQuizRequest,
            SelectOptionRequest,
            ScoreResponse,
            FactPanelResponse,
        )
    ),
    tags(
        (name = "StellarVoyage API", description = "API endpoints for the solar-system explorer.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// One planet record as served to the catalog, atlas and admin views.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanetResponse {
    id: String,
    name: String,
    distance: String,
    size: String,
    temperature: String,
    fact: String,
    color: String,
    orbit_speed: f64,
    orbit_size: f64,
    diameter: f64,
    gravity: String,
    moons: u32,
    rotation_time: String,
}

impl From<&Planet> for PlanetResponse {
    fn from(p: &Planet) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            distance: p.distance.clone(),
            size: p.size.clone(),
            temperature: p.temperature.clone(),
            fact: p.fact.clone(),
            color: p.color.clone(),
            orbit_speed: p.orbit_speed,
            orbit_size: p.orbit_size,
            diameter: p.diameter,
            gravity: p.gravity.clone(),
            moons: p.moons,
            rotation_time: p.rotation_time.clone(),
        }
    }
}

/// The full replacement record for an admin edit. The id comes from the path.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPayload {
    name: String,
    distance: String,
    size: String,
    temperature: String,
    fact: String,
    color: String,
    orbit_speed: f64,
    orbit_size: f64,
    diameter: f64,
    gravity: String,
    moons: u32,
    rotation_time: String,
}

impl PlanetPayload {
    fn into_planet(self, id: String) -> Planet {
        Planet {
            id,
            name: self.name,
            distance: self.distance,
            size: self.size,
            temperature: self.temperature,
            fact: self.fact,
            color: self.color,
            orbit_speed: self.orbit_speed,
            orbit_size: self.orbit_size,
            diameter: self.diameter,
            gravity: self.gravity,
            moons: self.moons,
            rotation_time: self.rotation_time,
        }
    }
}

#[derive(Deserialize)]
pub struct SearchParams {
    search: Option<String>,
}

/// The visualizer view: the global orbiting flag plus one marker per planet
/// matching the search query.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemViewResponse {
    orbiting: bool,
    markers: Vec<OrbitMarkerResponse>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrbitMarkerResponse {
    id: String,
    name: String,
    color: String,
    orbit_size: f64,
    diameter: f64,
    /// Angular position along the orbit, in degrees.
    angle: f64,
}

impl From<orbit::OrbitMarker> for OrbitMarkerResponse {
    fn from(m: orbit::OrbitMarker) -> Self {
        Self {
            id: m.id,
            name: m.name,
            color: m.color,
            orbit_size: m.orbit_size,
            diameter: m.diameter,
            angle: m.angle,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct SetOrbitingRequest {
    orbiting: bool,
}

/// A projection of the quiz state machine for the quiz view.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizViewResponse {
    /// One of `notStarted`, `inProgress`, `finished`.
    phase: String,
    total_questions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    question_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<QuestionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected_option: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<ScoreResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    id: u32,
    question: String,
    options: Vec<String>,
}

impl QuizViewResponse {
    fn project(session: &QuizSession) -> Self {
        let total_questions = session.questions().len() as u32;
        match session.phase() {
            QuizPhase::NotStarted => Self {
                phase: "notStarted".to_string(),
                total_questions,
                question_index: None,
                question: None,
                selected_option: None,
                result: None,
            },
            QuizPhase::InProgress {
                question_index,
                selected_option,
                ..
            } => {
                let question = session.current_question().map(|q| QuestionResponse {
                    id: q.id,
                    question: q.question.clone(),
                    options: q.options.clone(),
                });
                Self {
                    phase: "inProgress".to_string(),
                    total_questions,
                    question_index: Some(*question_index as u32),
                    question,
                    selected_option: selected_option.map(|o| o as u32),
                    result: None,
                }
            }
            QuizPhase::Finished { result } => Self {
                phase: "finished".to_string(),
                total_questions,
                question_index: None,
                question: None,
                selected_option: None,
                result: Some(ScoreResponse::from(result)),
            },
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct StartQuizRequest {
    username: String,
}

#[derive(Deserialize, ToSchema)]
pub struct SelectOptionRequest {
    option: u32,
}

/// One recorded quiz result, as shown on the admin leaderboard.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    id: String,
    username: String,
    score: u32,
    total: u32,
    date: String,
}

impl From<&QuizScore> for ScoreResponse {
    fn from(s: &QuizScore) -> Self {
        Self {
            id: s.id.clone(),
            username: s.username.clone(),
            score: s.score,
            total: s.total,
            date: s.date.clone(),
        }
    }
}

/// The current fact-panel state of the planet detail view.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FactPanelResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    planet_id: Option<String>,
    /// One of `idle`, `loading`, `ready`, `failed`.
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl FactPanelResponse {
    fn project(planet_id: Option<&str>, state: &FactState) -> Self {
        let (status, text) = match state {
            FactState::Idle => ("idle", None),
            FactState::Loading => ("loading", None),
            FactState::Ready(text) => ("ready", Some(text.clone())),
            FactState::Failed(fallback) => ("failed", Some(fallback.clone())),
        };
        Self {
            planet_id: planet_id.map(str::to_string),
            status: status.to_string(),
            text,
        }
    }
}

//=========================================================================================
// Error Mapping
//=========================================================================================

fn catalog_error_response(err: CatalogError) -> (StatusCode, String) {
    match err {
        CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        CatalogError::Invalid(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        CatalogError::Storage(_) => {
            error!("Catalog persistence failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to persist the catalog".to_string(),
            )
        }
    }
}

//=========================================================================================
// Catalog / Atlas / Admin Handlers
//=========================================================================================

/// List the planet catalog, optionally filtered by a search query.
#[utoipa::path(
    get,
    path = "/planets",
    params(("search" = Option<String>, Query, description = "Case-insensitive name filter")),
    responses(
        (status = 200, description = "The matching planets, in creation order", body = [PlanetResponse])
    )
)]
pub async fn list_planets_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<PlanetResponse>> {
    let catalog = app_state.catalog.read().await;
    let query = params.search.unwrap_or_default();
    let planets = catalog.filter(&query);
    Json(planets.iter().map(PlanetResponse::from).collect())
}

/// Replace a planet record (admin edit).
#[utoipa::path(
    put,
    path = "/planets/{id}",
    request_body = PlanetPayload,
    responses(
        (status = 200, description = "The updated record", body = PlanetResponse),
        (status = 404, description = "No planet with that id"),
        (status = 422, description = "The record violates a catalog invariant")
    ),
    params(("id" = String, Path, description = "The planet id"))
)]
pub async fn update_planet_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<PlanetPayload>,
) -> Result<Json<PlanetResponse>, (StatusCode, String)> {
    let planet = payload.into_planet(id);
    let response = PlanetResponse::from(&planet);
    let mut catalog = app_state.catalog.write().await;
    catalog
        .update(planet)
        .await
        .map_err(catalog_error_response)?;
    Ok(Json(response))
}

/// Delete a planet record (admin). Deleting an unknown id is a no-op.
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    responses((status = 204, description = "Deleted (or already absent)")),
    params(("id" = String, Path, description = "The planet id"))
)]
pub async fn delete_planet_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut catalog = app_state.catalog.write().await;
    catalog.delete(&id).await.map_err(catalog_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

//=========================================================================================
// Visualizer Handlers
//=========================================================================================

/// The solar-system visualizer view: orbit markers with live or parked angles.
#[utoipa::path(
    get,
    path = "/system",
    params(("search" = Option<String>, Query, description = "Case-insensitive name filter")),
    responses((status = 200, description = "The current visualizer frame", body = SystemViewResponse))
)]
pub async fn system_view_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<SystemViewResponse> {
    let (orbiting, elapsed) = {
        let system = app_state.system.lock().await;
        (system.orbiting(), system.elapsed_secs())
    };
    let catalog = app_state.catalog.read().await;
    let query = params.search.unwrap_or_default();
    let markers = orbit::project(catalog.list(), &query, orbiting, elapsed)
        .into_iter()
        .map(OrbitMarkerResponse::from)
        .collect();
    Json(SystemViewResponse { orbiting, markers })
}

/// Switch the global orbit animation on or off.
#[utoipa::path(
    put,
    path = "/system/orbiting",
    request_body = SetOrbitingRequest,
    responses((status = 200, description = "The updated visualizer frame", body = SystemViewResponse))
)]
pub async fn set_orbiting_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<SetOrbitingRequest>,
) -> Json<SystemViewResponse> {
    {
        let mut system = app_state.system.lock().await;
        system.set_orbiting(request.orbiting);
    }
    system_view_handler(State(app_state), Query(SearchParams { search: None })).await
}

//=========================================================================================
// Quiz Handlers
//=========================================================================================

/// The current quiz view.
#[utoipa::path(
    get,
    path = "/quiz",
    responses((status = 200, description = "The quiz session state", body = QuizViewResponse))
)]
pub async fn quiz_view_handler(State(app_state): State<Arc<AppState>>) -> Json<QuizViewResponse> {
    let quiz = app_state.quiz.lock().await;
    Json(QuizViewResponse::project(&quiz))
}

/// Start a quiz session for the given username.
#[utoipa::path(
    post,
    path = "/quiz/start",
    request_body = StartQuizRequest,
    responses(
        (status = 200, description = "The session is now in progress", body = QuizViewResponse),
        (status = 422, description = "Blank username or session already started")
    )
)]
pub async fn start_quiz_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<StartQuizRequest>,
) -> Result<Json<QuizViewResponse>, (StatusCode, String)> {
    let mut quiz = app_state.quiz.lock().await;
    quiz.start(&request.username)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;
    Ok(Json(QuizViewResponse::project(&quiz)))
}

/// Select (or change) the answer for the current question.
#[utoipa::path(
    post,
    path = "/quiz/select",
    request_body = SelectOptionRequest,
    responses(
        (status = 200, description = "Selection recorded", body = QuizViewResponse),
        (status = 422, description = "Out-of-range option or no session in progress")
    )
)]
pub async fn select_option_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<SelectOptionRequest>,
) -> Result<Json<QuizViewResponse>, (StatusCode, String)> {
    let mut quiz = app_state.quiz.lock().await;
    quiz.select(request.option as usize)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;
    Ok(Json(QuizViewResponse::project(&quiz)))
}

/// Score the current selection and move to the next question. On the last
/// question the session finishes and the emitted score is recorded into the
/// history before the response is sent.
#[utoipa::path(
    post,
    path = "/quiz/advance",
    responses(
        (status = 200, description = "The advanced session state", body = QuizViewResponse),
        (status = 422, description = "No option selected or no session in progress")
    )
)]
pub async fn advance_quiz_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<QuizViewResponse>, (StatusCode, String)> {
    let mut quiz = app_state.quiz.lock().await;
    let today = Local::now().date_naive();
    let emitted = quiz
        .advance(today)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;

    if let Some(score) = emitted {
        let mut scores = app_state.scores.write().await;
        if let Err(e) = scores.record(score).await {
            // The session outcome stands even when the history write fails.
            warn!("Failed to persist quiz score: {e}");
        }
    }
    Ok(Json(QuizViewResponse::project(&quiz)))
}

/// Discard the session and return to the start screen.
#[utoipa::path(
    post,
    path = "/quiz/reset",
    responses((status = 200, description = "The session is back at the start", body = QuizViewResponse))
)]
pub async fn reset_quiz_handler(State(app_state): State<Arc<AppState>>) -> Json<QuizViewResponse> {
    let mut quiz = app_state.quiz.lock().await;
    quiz.reset();
    Json(QuizViewResponse::project(&quiz))
}

/// The quiz leaderboard, most recent first.
#[utoipa::path(
    get,
    path = "/scores",
    responses((status = 200, description = "All recorded scores", body = [ScoreResponse]))
)]
pub async fn list_scores_handler(
    State(app_state): State<Arc<AppState>>,
) -> Json<Vec<ScoreResponse>> {
    let scores = app_state.scores.read().await;
    Json(scores.list().iter().map(ScoreResponse::from).collect())
}

//=========================================================================================
// Fact Panel Handlers
//=========================================================================================

/// Open (or refresh) the fact panel for a planet. The generated fact is
/// fetched in the background; poll `GET /fact` for the result. A response
/// that arrives after the panel moved on is discarded.
#[utoipa::path(
    post,
    path = "/planets/{id}/fact",
    responses(
        (status = 202, description = "Fetch started", body = FactPanelResponse),
        (status = 404, description = "No planet with that id")
    ),
    params(("id" = String, Path, description = "The planet id"))
)]
pub async fn open_fact_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<FactPanelResponse>), (StatusCode, String)> {
    let planet_name = {
        let catalog = app_state.catalog.read().await;
        catalog
            .get(&id)
            .map(|p| p.name.clone())
            .ok_or_else(|| {
                (
                    StatusCode::NOT_FOUND,
                    format!("No planet with id {id} in the catalog"),
                )
            })?
    };

    // Snapshot the loading state before the fetch can resolve.
    let (token, snapshot) = {
        let mut panel = app_state.fact_panel.lock().await;
        let token = panel.open(&id);
        (
            token,
            FactPanelResponse::project(panel.planet_id(), panel.state()),
        )
    };

    let task_state = app_state.clone();
    let task_id = id.clone();
    tokio::spawn(async move {
        let outcome = task_state.fact_adapter.generate_fact(&planet_name).await;
        let mut panel = task_state.fact_panel.lock().await;
        if !panel.resolve(&task_id, token, outcome) {
            warn!(planet_id = %task_id, "Discarded stale fact result");
        }
    });

    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}

/// The current state of the fact panel.
#[utoipa::path(
    get,
    path = "/fact",
    responses((status = 200, description = "The fact panel state", body = FactPanelResponse))
)]
pub async fn fact_panel_handler(
    State(app_state): State<Arc<AppState>>,
) -> Json<FactPanelResponse> {
    let panel = app_state.fact_panel.lock().await;
    Json(FactPanelResponse::project(panel.planet_id(), panel.state()))
}

/// Close the planet detail view.
#[utoipa::path(
    delete,
    path = "/fact",
    responses((status = 204, description = "Panel closed"))
)]
pub async fn close_fact_handler(State(app_state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut panel = app_state.fact_panel.lock().await;
    panel.close();
    StatusCode::NO_CONTENT
}
