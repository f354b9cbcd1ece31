//! Domain layer for the URL store.
//!
//! Defines the repository interface the HTTP layer depends on, independent of
//! how the mapping is actually held.
//!
//! # Architecture
//!
//! - [`repositories`] - Data access trait definitions
//!
//! Concrete implementations live in `crate::infrastructure::persistence`.

pub mod repositories;
