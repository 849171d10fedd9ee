//! services/api/src/web/state.rs
//!
//! Defines the application's shared state and the view-state types that sit
//! on top of the core stores: the visualizer's orbiting flag/clock and the
//! planet-detail fact panel.

use std::sync::Arc;
use std::time::Instant;

use stellar_voyage_core::catalog::CatalogStore;
use stellar_voyage_core::ports::{FactGenerationService, PortResult, StorageService};
use stellar_voyage_core::quiz::QuizSession;
use stellar_voyage_core::scores::ScoreHistory;
use tokio::sync::{Mutex, RwLock};

use crate::config::Config;

//=========================================================================================
// AppState (Shared Across All Connections)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
pub struct AppState {
    pub config: Arc<Config>,
    pub storage: Arc<dyn StorageService>,
    pub fact_adapter: Arc<dyn FactGenerationService>,
    pub catalog: RwLock<CatalogStore>,
    pub scores: RwLock<ScoreHistory>,
    pub quiz: Mutex<QuizSession>,
    pub system: Mutex<SystemView>,
    pub fact_panel: Mutex<FactPanel>,
}

//=========================================================================================
// SystemView (Visualizer Flag + Animation Clock)
//=========================================================================================

/// The visualizer's global state: whether planets are orbiting and the
/// monotonic clock the live angles are derived from.
pub struct SystemView {
    orbiting: bool,
    started_at: Instant,
}

impl SystemView {
    pub fn new() -> Self {
        Self {
            orbiting: true,
            started_at: Instant::now(),
        }
    }

    pub fn orbiting(&self) -> bool {
        self.orbiting
    }

    /// Toggling is instantaneous: the angle function switches between live
    /// and parked with no transition state.
    pub fn set_orbiting(&mut self, orbiting: bool) {
        self.orbiting = orbiting;
    }

    /// Seconds elapsed on the animation clock since startup.
    pub fn elapsed_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

impl Default for SystemView {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================================
// FactPanel (Planet Detail View State)
//=========================================================================================

/// Fallback shown when the fact call fails outright.
pub const UNREACHABLE_FALLBACK: &str =
    "The stars are currently unreachable, but their beauty remains.";

/// Fallback shown when the call succeeds but produces no text.
pub const EMPTY_FALLBACK: &str = "Space is vast and full of mysteries!";

/// The fact display of the currently open planet detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactState {
    Idle,
    Loading,
    Ready(String),
    Failed(String),
}

/// Tracks which planet the detail view is showing and the state of its fact
/// request. A sequence number guards against stale responses: a request
/// resolves only if the panel still shows the same planet and no newer
/// request has been issued since (last-write-wins).
pub struct FactPanel {
    planet_id: Option<String>,
    seq: u64,
    state: FactState,
}

impl FactPanel {
    pub fn new() -> Self {
        Self {
            planet_id: None,
            seq: 0,
            state: FactState::Idle,
        }
    }

    pub fn planet_id(&self) -> Option<&str> {
        self.planet_id.as_deref()
    }

    pub fn state(&self) -> &FactState {
        &self.state
    }

    /// Opens the detail view for a planet (or refreshes the current one) and
    /// returns the token the in-flight request must present to resolve.
    pub fn open(&mut self, planet_id: &str) -> u64 {
        self.planet_id = Some(planet_id.to_string());
        self.seq += 1;
        self.state = FactState::Loading;
        self.seq
    }

    /// Applies the outcome of a fact request. Returns `false` when the
    /// result is stale (the view moved to another planet, was refreshed, or
    /// closed) and is discarded.
    pub fn resolve(
        &mut self,
        planet_id: &str,
        token: u64,
        outcome: PortResult<String>,
    ) -> bool {
        if self.planet_id.as_deref() != Some(planet_id) || token != self.seq {
            return false;
        }
        self.state = match outcome {
            Ok(text) if text.trim().is_empty() => FactState::Ready(EMPTY_FALLBACK.to_string()),
            Ok(text) => FactState::Ready(text.trim().to_string()),
            Err(_) => FactState::Failed(UNREACHABLE_FALLBACK.to_string()),
        };
        true
    }

    /// Closes the detail view. Any in-flight result arriving afterwards is
    /// discarded on arrival.
    pub fn close(&mut self) {
        self.planet_id = None;
        self.seq += 1;
        self.state = FactState::Idle;
    }
}

impl Default for FactPanel {
    fn default() -> Self {
        Self::new()
    }
}
