//! crates/stellar_voyage_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like the browser-local
//! storage substrate or the generative-text API.

use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., filesystem, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Durable key-value storage of JSON-shaped documents.
///
/// Implementations must treat a missing key as `Ok(None)` rather than an
/// error, and should degrade malformed stored content to `Ok(None)` so a
/// corrupt document never takes down the caller.
#[async_trait]
pub trait StorageService: Send + Sync {
    async fn save(&self, key: &str, value: serde_json::Value) -> PortResult<()>;

    async fn load(&self, key: &str) -> PortResult<Option<serde_json::Value>>;
}

/// The generative-text collaborator that supplies a supplementary fact for
/// a planet. Failures are expected and handled by the caller's fallback
/// substitution.
#[async_trait]
pub trait FactGenerationService: Send + Sync {
    /// Generates a short free-text fact about the named planet.
    async fn generate_fact(&self, planet_name: &str) -> PortResult<String>;
}
