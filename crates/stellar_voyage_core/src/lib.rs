pub mod catalog;
pub mod domain;
pub mod orbit;
pub mod ports;
pub mod quiz;
pub mod scores;
pub mod seed;
pub mod testing;

pub use catalog::{CatalogError, CatalogStore, CATALOG_KEY};
pub use domain::{Planet, QuizQuestion, QuizScore};
pub use orbit::{orbit_angle, parked_angle, OrbitMarker};
pub use ports::{FactGenerationService, PortError, PortResult, StorageService};
pub use quiz::{QuizError, QuizPhase, QuizSession};
pub use scores::{ScoreHistory, SCORES_KEY};
