//! Infrastructure layer implementing domain interfaces.
//!
//! # Modules
//!
//! - [`persistence`] - Concrete URL store implementations

pub mod persistence;
