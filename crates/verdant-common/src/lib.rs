//! # Verdant Common
//!
//! Common types, utilities, and shared abstractions for Verdant.
//!
//! This crate provides foundational types used across all Verdant subsystems:
//! - Coordinate types (world positions, chunk keys)
//! - Configuration validation errors
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
}

pub use prelude::*;
