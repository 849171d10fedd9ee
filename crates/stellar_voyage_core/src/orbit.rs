//! crates/stellar_voyage_core/src/orbit.rs
//!
//! Derives each planet's angular position along its display orbit. When the
//! global orbiting flag is on, the angle advances with the animation clock at
//! one revolution per `orbit_speed` seconds; when it is off, every planet
//! freezes at a static layout evenly spaced by its index in the full catalog.

use serde::Serialize;

use crate::catalog::matches_query;
use crate::domain::Planet;

/// Angular position in degrees after `elapsed_secs` of animation, for a
/// planet completing one revolution every `orbit_speed` seconds.
/// Periodic: `orbit_angle(t + orbit_speed, orbit_speed) == orbit_angle(t, orbit_speed)`.
pub fn orbit_angle(elapsed_secs: f64, orbit_speed: f64) -> f64 {
    if orbit_speed <= 0.0 {
        return 0.0;
    }
    elapsed_secs.rem_euclid(orbit_speed) / orbit_speed * 360.0
}

/// The frozen layout angle for the planet at `index` of a catalog holding
/// `count` planets. Independent of time and of any active search filter.
pub fn parked_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 * 360.0 / count as f64
}

/// One renderable planet in the visualizer view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitMarker {
    pub id: String,
    pub name: String,
    pub color: String,
    pub orbit_size: f64,
    pub diameter: f64,
    pub angle: f64,
}

/// Projects the catalog into the visualizer view: planets matching `query`,
/// each placed at its live or parked angle. Filtering drops non-matching
/// planets without altering the angle of the survivors, so the parked offset
/// is derived from the planet's position in the *full* catalog.
pub fn project(planets: &[Planet], query: &str, orbiting: bool, elapsed_secs: f64) -> Vec<OrbitMarker> {
    let count = planets.len();
    planets
        .iter()
        .enumerate()
        .filter(|(_, p)| matches_query(&p.name, query))
        .map(|(index, p)| OrbitMarker {
            id: p.id.clone(),
            name: p.name.clone(),
            color: p.color.clone(),
            orbit_size: p.orbit_size,
            diameter: p.diameter,
            angle: if orbiting {
                orbit_angle(elapsed_secs, p.orbit_speed)
            } else {
                parked_angle(index, count)
            },
        })
        .collect()
}
