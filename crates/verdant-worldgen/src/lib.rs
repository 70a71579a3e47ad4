//! # Verdant Worldgen
//!
//! Procedural content generation for the infinite plane:
//! - Coherent noise field (deterministic, locally continuous)
//! - Road network classification
//! - Ground surface classification
//! - Decorative content placement (trees, rocks, flowers, markers, patches)
//!
//! Everything here is a pure function of the world seed and coordinates; no
//! mutable state survives construction.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod noise_field;
pub mod placer;
pub mod roads;
pub mod surface;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::noise_field::*;
    pub use crate::placer::*;
    pub use crate::roads::*;
    pub use crate::surface::*;
}

pub use prelude::*;
