//! Chunk descriptors handed to the scene collaborator.

use serde::{Deserialize, Serialize};
use verdant_common::{ChunkKey, WorldPos};
use verdant_worldgen::{ChunkContent, Placement, SurfaceKind};

/// Everything the scene collaborator needs to instantiate one chunk.
///
/// Emitted at most once per resident key; ownership of the placement records
/// passes to the collaborator with the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkDescriptor {
    /// Key of the chunk cell.
    pub key: ChunkKey,
    /// World-space origin of the chunk (`key * chunk_size`).
    pub origin: WorldPos,
    /// Ground surface classification.
    pub surface: SurfaceKind,
    /// Decorative placements in emission order.
    pub placements: Vec<Placement>,
}

impl ChunkDescriptor {
    /// Assembles a descriptor from generated chunk content.
    #[must_use]
    pub fn new(key: ChunkKey, origin: WorldPos, content: ChunkContent) -> Self {
        Self {
            key,
            origin,
            surface: content.surface,
            placements: content.placements,
        }
    }

    /// Returns the number of placement records in this chunk.
    #[must_use]
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }
}
