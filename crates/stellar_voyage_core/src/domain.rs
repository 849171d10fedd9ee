//! crates/stellar_voyage_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage format or web framework;
//! the serde derives only fix the document shape used by the persistence port.

use serde::{Deserialize, Serialize};

/// A single planet record in the catalog.
///
/// `orbit_speed` is the number of seconds per full revolution, `orbit_size`
/// the display orbit radius and `diameter` the display diameter, all in
/// pixels. The remaining fields are free-form display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: String,
    pub name: String,
    pub distance: String,
    pub size: String,
    pub temperature: String,
    pub fact: String,
    pub color: String,
    pub orbit_speed: f64,
    pub orbit_size: f64,
    pub diameter: f64,
    pub gravity: String,
    pub moons: u32,
    pub rotation_time: String,
}

/// Violations of the per-record planet invariants.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PlanetInvariantError {
    #[error("Planet id must not be empty")]
    EmptyId,
    #[error("Planet name must not be empty")]
    EmptyName,
    #[error("Planet field {0} must be strictly positive, got {1}")]
    NonPositive(&'static str, f64),
}

impl Planet {
    /// Checks the invariants a record must satisfy before it may enter
    /// the catalog: non-empty identity and strictly positive display
    /// parameters.
    pub fn validate(&self) -> Result<(), PlanetInvariantError> {
        if self.id.trim().is_empty() {
            return Err(PlanetInvariantError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(PlanetInvariantError::EmptyName);
        }
        for (field, value) in [
            ("orbitSpeed", self.orbit_speed),
            ("orbitSize", self.orbit_size),
            ("diameter", self.diameter),
        ] {
            if !(value > 0.0) {
                return Err(PlanetInvariantError::NonPositive(field, value));
            }
        }
        Ok(())
    }
}

/// A multiple-choice question. Static data, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

impl QuizQuestion {
    /// A question is well-formed when it has at least one option and its
    /// correct-answer index points into the option list.
    pub fn is_well_formed(&self) -> bool {
        !self.options.is_empty() && self.correct_answer < self.options.len()
    }
}

/// One recorded quiz result. Created exactly once when a session finishes
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizScore {
    pub id: String,
    pub username: String,
    pub score: u32,
    pub total: u32,
    pub date: String,
}
