//! Shared types for the Courtside registration flow
//!
//! Domain models and wire payloads used by both the HTTP client and the
//! registration orchestrator.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
