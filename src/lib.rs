//! # tinylink
//!
//! A minimal URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! The crate keeps a clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Repository trait for the URL store
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store implementation
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Behavior
//!
//! - `POST /shorten` maps a long URL to a fixed-length random code
//! - `GET /{code}` redirects to the stored URL, or answers `404 URL Not Found`
//! - `GET /health` reports service status and store size
//!
//! The mapping lives in process memory only: no persistence, no collision
//! resolution, no expiry. Codes are drawn uniformly from `[A-Za-z0-9]` with
//! no uniqueness check; a colliding code silently overwrites (last write wins).
//!
//! ## Quick Start
//!
//! ```bash
//! # All variables are optional
//! export LISTEN="0.0.0.0:5000"
//! export BASE_URL="http://localhost:5000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryUrlRepository;
    pub use crate::state::AppState;
}
