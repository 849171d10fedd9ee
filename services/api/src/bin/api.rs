//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{fact_llm::OpenAiFactAdapter, store::JsonFileStore},
    config::Config,
    error::ApiError,
    web::{
        rest::{
            advance_quiz_handler, close_fact_handler, delete_planet_handler, fact_panel_handler,
            list_planets_handler, list_scores_handler, open_fact_handler, quiz_view_handler,
            reset_quiz_handler, select_option_handler, set_orbiting_handler, start_quiz_handler,
            system_view_handler, update_planet_handler, ApiDoc,
        },
        state::{AppState, FactPanel, SystemView},
    },
};
use async_openai::{config::OpenAIConfig, Client};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use stellar_voyage_core::{
    catalog::CatalogStore,
    ports::{FactGenerationService, StorageService},
    quiz::QuizSession,
    scores::ScoreHistory,
    seed::quiz_questions,
};
use tokio::sync::{Mutex, RwLock};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Open the Local Document Store & Core Collections ---
    info!("Opening data directory at {}", config.data_dir.display());
    let storage: Arc<dyn StorageService> = Arc::new(JsonFileStore::new(config.data_dir.clone()));
    let catalog = CatalogStore::open(storage.clone()).await;
    info!("Catalog opened with {} planets", catalog.list().len());
    let scores = ScoreHistory::open(storage.clone()).await;
    info!("Score history opened with {} entries", scores.list().len());

    // --- 3. Initialize Service Adapters ---
    let openai_config = match &config.openai_api_key {
        Some(key) => OpenAIConfig::new().with_api_key(key),
        None => {
            warn!("OPENAI_API_KEY is not set; fact requests will resolve to the fallback text");
            OpenAIConfig::new()
        }
    };
    let openai_client = Client::with_config(openai_config);
    let fact_adapter: Arc<dyn FactGenerationService> = Arc::new(OpenAiFactAdapter::new(
        openai_client,
        config.fact_model.clone(),
        config.fact_temperature,
        config.fact_top_p,
    ));

    // --- 4. Build the Shared AppState ---
    let quiz = QuizSession::new(quiz_questions())
        .map_err(|e| ApiError::Internal(format!("Built-in quiz set is malformed: {e}")))?;
    let app_state = Arc::new(AppState {
        config: config.clone(),
        storage,
        fact_adapter,
        catalog: RwLock::new(catalog),
        scores: RwLock::new(scores),
        quiz: Mutex::new(quiz),
        system: Mutex::new(SystemView::new()),
        fact_panel: Mutex::new(FactPanel::new()),
    });

    // --- 5. Create the Web Router ---
    let api_router = Router::new()
        .route("/planets", get(list_planets_handler))
        .route("/planets/{id}", put(update_planet_handler))
        .route("/planets/{id}", delete(delete_planet_handler))
        .route("/system", get(system_view_handler))
        .route("/system/orbiting", put(set_orbiting_handler))
        .route("/quiz", get(quiz_view_handler))
        .route("/quiz/start", post(start_quiz_handler))
        .route("/quiz/select", post(select_option_handler))
        .route("/quiz/advance", post(advance_quiz_handler))
        .route("/quiz/reset", post(reset_quiz_handler))
        .route("/scores", get(list_scores_handler))
        .route("/planets/{id}/fact", post(open_fact_handler))
        .route("/fact", get(fact_panel_handler))
        .route("/fact", delete(close_fact_handler))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
