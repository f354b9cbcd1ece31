//! Concrete implementations of domain repository traits.
//!
//! - [`MemoryUrlRepository`] - process-local `HashMap` store

pub mod memory_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
