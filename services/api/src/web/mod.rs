pub mod rest;
pub mod state;

// Re-export the pieces the binary needs to assemble the router.
pub use rest::ApiDoc;
pub use state::AppState;
