//! Courtside Client - HTTP client for the tournament backend
//!
//! Typed access to the registration API: tournament catalog, category
//! prices, existing registrations, partner search, discount validation,
//! payment intents and code redemption.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
