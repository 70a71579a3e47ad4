//! # Verdant World
//!
//! Chunk streaming for Verdant.
//!
//! This crate handles:
//! - Deciding which chunks a moving viewpoint requires
//! - Generating each required chunk exactly once while it is resident
//! - Emitting chunk descriptors to the scene collaborator
//! - Retiring chunks that fall far behind the viewpoint

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod chunk;
pub mod scene;
pub mod streaming;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::chunk::*;
    pub use crate::scene::*;
    pub use crate::streaming::*;
}

pub use prelude::*;
