//! crates/stellar_voyage_core/src/catalog.rs
//!
//! The planet catalog store: the single source of truth for planet data.
//! Mutations transition the in-memory collection first, then explicitly sync
//! the full collection through the `StorageService` port.

use std::sync::Arc;

use crate::domain::{Planet, PlanetInvariantError};
use crate::ports::{PortError, StorageService};
use crate::seed::seed_planets;

/// The storage key under which the planet collection is persisted.
pub const CATALOG_KEY: &str = "sv_planets";

/// Errors surfaced by catalog mutations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("No planet with id {0} in the catalog")]
    NotFound(String),
    #[error("Invalid planet record: {0}")]
    Invalid(#[from] PlanetInvariantError),
    #[error("Failed to persist the catalog: {0}")]
    Storage(#[from] PortError),
}

/// Case-insensitive substring match on a planet name. An empty (or
/// all-whitespace) query matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Owns the in-memory planet collection and its persistence side effect.
pub struct CatalogStore {
    planets: Vec<Planet>,
    storage: Arc<dyn StorageService>,
}

impl CatalogStore {
    /// Opens the catalog: loads the persisted collection if one exists,
    /// otherwise falls back to the built-in seed. A malformed document is
    /// reported by the storage adapter as absent, so corruption also lands
    /// on the seed path.
    pub async fn open(storage: Arc<dyn StorageService>) -> Self {
        let planets = match storage.load(CATALOG_KEY).await {
            Ok(Some(value)) => {
                serde_json::from_value::<Vec<Planet>>(value).unwrap_or_else(|_| seed_planets())
            }
            _ => seed_planets(),
        };
        Self { planets, storage }
    }

    /// All planets, in creation order.
    pub fn list(&self) -> &[Planet] {
        &self.planets
    }

    /// Planets whose name contains `query`, case-insensitively. An empty
    /// query returns the full catalog.
    pub fn filter(&self, query: &str) -> Vec<Planet> {
        self.planets
            .iter()
            .filter(|p| matches_query(&p.name, query))
            .cloned()
            .collect()
    }

    /// Looks up a single planet by id.
    pub fn get(&self, id: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    /// Replaces the record whose id matches `planet.id` and persists the
    /// updated collection. Errors with `NotFound` when the id is absent and
    /// leaves the catalog untouched.
    pub async fn update(&mut self, planet: Planet) -> Result<(), CatalogError> {
        planet.validate()?;
        let slot = self
            .planets
            .iter_mut()
            .find(|p| p.id == planet.id)
            .ok_or_else(|| CatalogError::NotFound(planet.id.clone()))?;
        *slot = planet;
        self.sync().await?;
        Ok(())
    }

    /// Removes the record with the given id. Deleting an absent id is a
    /// no-op and does not rewrite storage.
    pub async fn delete(&mut self, id: &str) -> Result<(), CatalogError> {
        let before = self.planets.len();
        self.planets.retain(|p| p.id != id);
        if self.planets.len() != before {
            self.sync().await?;
        }
        Ok(())
    }

    /// Writes the full collection through the storage port.
    async fn sync(&self) -> Result<(), PortError> {
        let doc = serde_json::to_value(&self.planets)
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.storage.save(CATALOG_KEY, doc).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;

    async fn open_seeded() -> (CatalogStore, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::default());
        let catalog = CatalogStore::open(storage.clone()).await;
        (catalog, storage)
    }

    #[tokio::test]
    async fn opens_with_seed_when_storage_is_empty() {
        let (catalog, _) = open_seeded().await;
        assert_eq!(catalog.list().len(), 8);
        assert_eq!(catalog.list()[0].name, "Mercury");
    }

    #[tokio::test]
    async fn opens_from_persisted_collection_when_present() {
        let storage = Arc::new(MemoryStore::default());
        let mut catalog = CatalogStore::open(storage.clone()).await;
        catalog.delete("8").await.unwrap();

        let reopened = CatalogStore::open(storage).await;
        assert_eq!(reopened.list().len(), 7);
        assert!(reopened.get("8").is_none());
    }

    #[tokio::test]
    async fn corrupt_document_falls_back_to_seed() {
        let storage = Arc::new(MemoryStore::default());
        storage
            .save(CATALOG_KEY, serde_json::json!({"not": "a planet list"}))
            .await
            .unwrap();
        let catalog = CatalogStore::open(storage).await;
        assert_eq!(catalog.list().len(), 8);
    }

    #[tokio::test]
    async fn update_replaces_exactly_one_record() {
        let (mut catalog, storage) = open_seeded().await;
        let before: Vec<Planet> = catalog.list().to_vec();

        let mut mars = catalog.get("4").unwrap().clone();
        mars.temperature = "-63°C".to_string();
        catalog.update(mars.clone()).await.unwrap();

        assert_eq!(catalog.list().len(), before.len());
        assert_eq!(catalog.get("4").unwrap().temperature, "-63°C");
        for planet in catalog.list().iter().filter(|p| p.id != "4") {
            let original = before.iter().find(|p| p.id == planet.id).unwrap();
            assert_eq!(planet, original);
        }

        // Mutation must be synced to storage.
        let stored = storage.load(CATALOG_KEY).await.unwrap().unwrap();
        let stored: Vec<Planet> = serde_json::from_value(stored).unwrap();
        assert_eq!(stored.iter().find(|p| p.id == "4").unwrap(), &mars);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_rejected() {
        let (mut catalog, _) = open_seeded().await;
        let mut ghost = catalog.get("1").unwrap().clone();
        ghost.id = "99".to_string();
        let err = catalog.update(ghost).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(id) if id == "99"));
        assert_eq!(catalog.list().len(), 8);
    }

    #[tokio::test]
    async fn update_rejects_invalid_record() {
        let (mut catalog, _) = open_seeded().await;
        let mut bad = catalog.get("1").unwrap().clone();
        bad.orbit_speed = 0.0;
        let err = catalog.update(bad).await.unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
        assert!(catalog.get("1").unwrap().orbit_speed > 0.0);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (mut catalog, _) = open_seeded().await;
        catalog.delete("3").await.unwrap();
        assert_eq!(catalog.list().len(), 7);
        catalog.delete("3").await.unwrap();
        assert_eq!(catalog.list().len(), 7);
        catalog.delete("no-such-id").await.unwrap();
        assert_eq!(catalog.list().len(), 7);
    }

    #[tokio::test]
    async fn filter_is_case_insensitive_and_total_on_empty_query() {
        let (catalog, _) = open_seeded().await;
        assert_eq!(catalog.filter("").len(), 8);
        assert_eq!(catalog.filter("   ").len(), 8);

        let hits = catalog.filter("mAr");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Mars");

        // Substring anywhere in the name.
        let hits = catalog.filter("une");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Neptune");

        assert!(catalog.filter("pluto").is_empty());
    }
}
