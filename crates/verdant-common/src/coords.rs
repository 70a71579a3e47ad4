//! Coordinate types for the infinite plane and its chunk grid.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Continuous position on the world plane.
///
/// The streaming subsystem is purely planar; there is no vertical component.
/// The axes are named `x` and `z` to match the ground plane of the scene
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct WorldPos {
    /// X coordinate in world units
    pub x: f32,
    /// Z coordinate in world units
    pub z: f32,
}

impl WorldPos {
    /// Creates a new world position.
    #[must_use]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Converts to the key of the chunk cell containing this position.
    ///
    /// Floor semantics: positions with negative coordinates round toward
    /// negative infinity, so every position maps to exactly one cell for any
    /// `chunk_size > 0`.
    #[must_use]
    pub fn chunk_key(self, chunk_size: f32) -> ChunkKey {
        ChunkKey {
            x: (self.x / chunk_size).floor() as i32,
            z: (self.z / chunk_size).floor() as i32,
        }
    }
}

/// Chunk key (identifies a cell in the world chunk grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct ChunkKey {
    /// X coordinate in chunk space
    pub x: i32,
    /// Z coordinate in chunk space
    pub z: i32,
}

impl ChunkKey {
    /// Creates a new chunk key.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Converts to the chunk's world-space origin (`key * chunk_size`).
    #[must_use]
    pub fn world_origin(self, chunk_size: f32) -> WorldPos {
        WorldPos {
            x: self.x as f32 * chunk_size,
            z: self.z as f32 * chunk_size,
        }
    }
}
