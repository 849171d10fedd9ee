//! Integration tests driving the REST handlers directly against an
//! in-memory storage adapter and a scripted fact backend.

use std::sync::Arc;
use std::time::Duration;

use api_lib::config::Config;
use api_lib::web::rest::{
    advance_quiz_handler, delete_planet_handler, fact_panel_handler, list_planets_handler,
    list_scores_handler, open_fact_handler, select_option_handler, start_quiz_handler,
    system_view_handler,
};
use api_lib::web::state::{AppState, FactPanel, FactState, SystemView, UNREACHABLE_FALLBACK};
use async_trait::async_trait;
use axum::extract::{Path, Query, State};
use axum::Json;
use stellar_voyage_core::catalog::CatalogStore;
use stellar_voyage_core::ports::{FactGenerationService, PortError, PortResult, StorageService};
use stellar_voyage_core::quiz::QuizSession;
use stellar_voyage_core::scores::ScoreHistory;
use stellar_voyage_core::seed::quiz_questions;
use stellar_voyage_core::testing::MemoryStore;
use tokio::sync::{Mutex, RwLock};

/// A fact backend that always fails, exercising the fallback path.
struct UnreachableFacts;

#[async_trait]
impl FactGenerationService for UnreachableFacts {
    async fn generate_fact(&self, _planet_name: &str) -> PortResult<String> {
        Err(PortError::Unexpected("backend down".to_string()))
    }
}

fn test_config() -> Arc<Config> {
    Arc::new(Config {
        bind_address: "127.0.0.1:0".parse().unwrap(),
        data_dir: std::path::PathBuf::from("unused"),
        log_level: tracing::Level::INFO,
        openai_api_key: None,
        fact_model: "test".to_string(),
        fact_temperature: 0.8,
        fact_top_p: 0.95,
    })
}

async fn app_with_facts(facts: Arc<dyn FactGenerationService>) -> Arc<AppState> {
    let storage: Arc<dyn StorageService> = Arc::new(MemoryStore::default());
    let catalog = CatalogStore::open(storage.clone()).await;
    let scores = ScoreHistory::open(storage.clone()).await;
    Arc::new(AppState {
        config: test_config(),
        storage,
        fact_adapter: facts,
        catalog: RwLock::new(catalog),
        scores: RwLock::new(scores),
        quiz: Mutex::new(QuizSession::new(quiz_questions()).unwrap()),
        system: Mutex::new(SystemView::new()),
        fact_panel: Mutex::new(FactPanel::new()),
    })
}

async fn settled_panel(app: &Arc<AppState>) -> (Option<String>, FactState) {
    for _ in 0..50 {
        {
            let panel = app.fact_panel.lock().await;
            if panel.state() != &FactState::Loading {
                return (
                    panel.planet_id().map(str::to_string),
                    panel.state().clone(),
                );
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("fact panel never settled");
}

#[tokio::test]
async fn failing_fact_backend_resolves_to_the_fallback_text() {
    let app = app_with_facts(Arc::new(UnreachableFacts)).await;

    let (status, Json(snapshot)) =
        open_fact_handler(State(app.clone()), Path("4".to_string()))
            .await
            .unwrap();
    assert_eq!(status, axum::http::StatusCode::ACCEPTED);
    let snapshot = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(snapshot["status"], "loading");

    // The rest of the interface stays responsive while the fetch is pending.
    let Json(planets) = list_planets_handler(
        State(app.clone()),
        Query(serde_json::from_str("{}").unwrap()),
    )
    .await;
    assert_eq!(planets.len(), 8);

    let (planet_id, state) = settled_panel(&app).await;
    assert_eq!(planet_id.as_deref(), Some("4"));
    assert_eq!(state, FactState::Failed(UNREACHABLE_FALLBACK.to_string()));

    let Json(view) = fact_panel_handler(State(app)).await;
    let view = serde_json::to_value(&view).unwrap();
    assert_eq!(view["status"], "failed");
    assert_eq!(view["text"], UNREACHABLE_FALLBACK);
}

#[tokio::test]
async fn opening_a_fact_for_an_unknown_planet_is_not_found() {
    let app = app_with_facts(Arc::new(UnreachableFacts)).await;
    let err = open_fact_handler(State(app), Path("pluto".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err.0, axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn advancing_without_a_selection_is_rejected() {
    let app = app_with_facts(Arc::new(UnreachableFacts)).await;

    start_quiz_handler(
        State(app.clone()),
        Json(serde_json::from_value(serde_json::json!({"username": "Ensign Io"})).unwrap()),
    )
    .await
    .unwrap();

    let err = advance_quiz_handler(State(app.clone())).await.unwrap_err();
    assert_eq!(err.0, axum::http::StatusCode::UNPROCESSABLE_ENTITY);

    // No state change: still on the first question.
    let quiz = app.quiz.lock().await;
    assert_eq!(quiz.current_question().unwrap().id, 1);
}

#[tokio::test]
async fn quiz_completion_records_the_score() {
    let app = app_with_facts(Arc::new(UnreachableFacts)).await;

    start_quiz_handler(
        State(app.clone()),
        Json(serde_json::from_value(serde_json::json!({"username": "Captain Vega"})).unwrap()),
    )
    .await
    .unwrap();

    let mut last_view = None;
    for _ in 0..5 {
        let correct = {
            let quiz = app.quiz.lock().await;
            quiz.current_question().unwrap().correct_answer as u32
        };
        select_option_handler(
            State(app.clone()),
            Json(serde_json::from_value(serde_json::json!({"option": correct})).unwrap()),
        )
        .await
        .unwrap();
        let Json(view) = advance_quiz_handler(State(app.clone())).await.unwrap();
        last_view = Some(serde_json::to_value(&view).unwrap());
    }

    let finished = last_view.unwrap();
    assert_eq!(finished["phase"], "finished");
    assert_eq!(finished["result"]["score"], 5);
    assert_eq!(finished["result"]["total"], 5);

    let Json(scores) = list_scores_handler(State(app)).await;
    let scores = serde_json::to_value(&scores).unwrap();
    assert_eq!(scores[0]["username"], "Captain Vega");
    assert_eq!(scores[0]["score"], 5);
}

#[tokio::test]
async fn admin_mutations_are_immediately_visible_to_every_view() {
    let app = app_with_facts(Arc::new(UnreachableFacts)).await;

    let status = delete_planet_handler(State(app.clone()), Path("8".to_string()))
        .await
        .unwrap();
    assert_eq!(status, axum::http::StatusCode::NO_CONTENT);

    let Json(planets) = list_planets_handler(
        State(app.clone()),
        Query(serde_json::from_str("{}").unwrap()),
    )
    .await;
    assert_eq!(planets.len(), 7);

    let Json(system) = system_view_handler(
        State(app),
        Query(serde_json::from_str("{}").unwrap()),
    )
    .await;
    let system = serde_json::to_value(&system).unwrap();
    assert_eq!(system["markers"].as_array().unwrap().len(), 7);
}
