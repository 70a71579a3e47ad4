//! Road network classification.
//!
//! The road network is an implicit, procedural pattern: a coarse primary
//! grid, diagonal connectors, and radial access roads near the world origin.
//! Classification is a pure function of world coordinates.

use serde::{Deserialize, Serialize};

/// Default spacing of the primary road grid, in world units.
pub const DEFAULT_GRID_SPACING: f32 = 50.0;
/// Default half-width of primary grid roads.
pub const DEFAULT_GRID_WIDTH: f32 = 3.0;
/// Default spacing of diagonal connector roads.
pub const DEFAULT_DIAGONAL_SPACING: f32 = 30.0;
/// Default half-width of diagonal connector roads.
pub const DEFAULT_DIAGONAL_WIDTH: f32 = 2.0;
/// Default radius around the origin containing radial access roads.
pub const DEFAULT_RADIAL_RADIUS: f32 = 100.0;
/// Default spacing of radial access roads.
pub const DEFAULT_RADIAL_SPACING: f32 = 20.0;
/// Default half-width of radial access roads.
pub const DEFAULT_RADIAL_WIDTH: f32 = 1.5;

/// Geometry of the procedural road network.
///
/// All tests use truncated-remainder (`%`) semantics, so bands are mirrored
/// symmetrically across the axes for negative coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadLayout {
    /// Spacing of the primary road grid.
    pub grid_spacing: f32,
    /// Half-width of primary grid roads.
    pub grid_width: f32,
    /// Spacing of diagonal connector roads.
    pub diagonal_spacing: f32,
    /// Half-width of diagonal connector roads.
    pub diagonal_width: f32,
    /// Radius around the world origin containing radial access roads.
    pub radial_radius: f32,
    /// Spacing of radial access roads.
    pub radial_spacing: f32,
    /// Half-width of radial access roads.
    pub radial_width: f32,
}

impl Default for RoadLayout {
    fn default() -> Self {
        Self {
            grid_spacing: DEFAULT_GRID_SPACING,
            grid_width: DEFAULT_GRID_WIDTH,
            diagonal_spacing: DEFAULT_DIAGONAL_SPACING,
            diagonal_width: DEFAULT_DIAGONAL_WIDTH,
            radial_radius: DEFAULT_RADIAL_RADIUS,
            radial_spacing: DEFAULT_RADIAL_SPACING,
            radial_width: DEFAULT_RADIAL_WIDTH,
        }
    }
}

impl RoadLayout {
    /// Returns whether the given world coordinate lies on a road.
    ///
    /// Combines three independent patterns by logical OR: the primary grid,
    /// diagonal connectors, and radial access roads (the latter only within
    /// `radial_radius` of the world origin).
    #[must_use]
    pub fn is_road(&self, x: f32, z: f32) -> bool {
        if (x % self.grid_spacing).abs() < self.grid_width
            || (z % self.grid_spacing).abs() < self.grid_width
        {
            return true;
        }

        if ((x + z) % self.diagonal_spacing).abs() < self.diagonal_width
            || ((x - z) % self.diagonal_spacing).abs() < self.diagonal_width
        {
            return true;
        }

        let origin_dist = (x * x + z * z).sqrt();
        origin_dist < self.radial_radius
            && ((x + 2.0 * z) % self.radial_spacing).abs() < self.radial_width
    }

    /// Returns whether the coordinate lies within `tolerance` of a primary
    /// grid line.
    ///
    /// This is the looser band test used to gate decorative road markers. It
    /// intentionally differs from [`is_road`](Self::is_road): markers and the
    /// coloured road surface are not always coincident.
    #[must_use]
    pub fn near_primary_grid(&self, x: f32, z: f32, tolerance: f32) -> bool {
        (x % self.grid_spacing).abs() < tolerance || (z % self.grid_spacing).abs() < tolerance
    }
}
