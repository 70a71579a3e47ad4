//! Ground surface classification.
//!
//! Maps a world coordinate (plus its terrain height) to a surface class and
//! colour. The branch order is a contract: roads always win, then height,
//! then the biome noise bands.

use serde::{Deserialize, Serialize};

use crate::noise_field::NoiseField;
use crate::roads::RoadLayout;

/// Coordinate scale of biome noise sampling.
const BIOME_NOISE_SCALE: f64 = 0.1;
/// Height above which ground reads as mountain.
const MOUNTAIN_HEIGHT: f32 = 3.0;
/// Height above which ground reads as hill.
const HILL_HEIGHT: f32 = 1.0;
/// Biome noise above which lowland reads as dry scrub.
const DRY_THRESHOLD: f64 = 0.3;
/// Biome noise above which lowland reads as grassland.
const GRASSLAND_THRESHOLD: f64 = -0.2;

/// Linear RGB colour with components in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Rgb {
    /// Creates a new colour.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Classification of a chunk's ground surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Road surface.
    Road,
    /// High rocky ground.
    Mountain,
    /// Raised earthy ground.
    Hill,
    /// Dry, sandy lowland.
    Dry,
    /// Dry-grass lowland.
    Grassland,
    /// Fertile lowland.
    FertileLowland,
}

impl SurfaceKind {
    /// Returns the display colour for this surface.
    #[must_use]
    pub const fn color(self) -> Rgb {
        match self {
            Self::Road => Rgb::new(0.5, 0.4, 0.3),
            Self::Mountain => Rgb::new(0.6, 0.5, 0.3),
            Self::Hill => Rgb::new(0.7, 0.6, 0.2),
            Self::Dry => Rgb::new(0.9, 0.8, 0.4),
            Self::Grassland => Rgb::new(0.7, 0.7, 0.3),
            Self::FertileLowland => Rgb::new(0.6, 0.7, 0.2),
        }
    }
}

/// Classifies the ground surface at a world coordinate.
///
/// Strict precedence, first match wins: road, mountain (`height > 3`), hill
/// (`height > 1`), then the biome noise bands. Swapping the order changes the
/// visible terrain composition, so it is part of the contract.
#[must_use]
pub fn classify(
    noise: &NoiseField,
    roads: &RoadLayout,
    height: f32,
    x: f32,
    z: f32,
) -> SurfaceKind {
    if roads.is_road(x, z) {
        return SurfaceKind::Road;
    }
    if height > MOUNTAIN_HEIGHT {
        return SurfaceKind::Mountain;
    }
    if height > HILL_HEIGHT {
        return SurfaceKind::Hill;
    }

    let v = noise.sample(f64::from(x) * BIOME_NOISE_SCALE, f64::from(z) * BIOME_NOISE_SCALE);
    if v > DRY_THRESHOLD {
        SurfaceKind::Dry
    } else if v > GRASSLAND_THRESHOLD {
        SurfaceKind::Grassland
    } else {
        SurfaceKind::FertileLowland
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_wins_over_height() {
        let noise = NoiseField::new(42);
        let roads = RoadLayout::default();

        // (50, 0) is on the primary grid; road colour regardless of height.
        assert_eq!(classify(&noise, &roads, 4.0, 50.0, 0.0), SurfaceKind::Road);
        assert_eq!(classify(&noise, &roads, 0.0, 50.0, 0.0), SurfaceKind::Road);
    }

    #[test]
    fn test_mountain_beats_noise() {
        let noise = NoiseField::new(42);
        let roads = RoadLayout::default();

        // (20, 7) is off the road network; height alone decides.
        assert_eq!(classify(&noise, &roads, 4.0, 20.0, 7.0), SurfaceKind::Mountain);
        assert_eq!(classify(&noise, &roads, 3.0, 20.0, 7.0), SurfaceKind::Hill);
        assert_eq!(classify(&noise, &roads, 2.0, 20.0, 7.0), SurfaceKind::Hill);
    }

    #[test]
    fn test_lowland_follows_biome_noise() {
        let noise = NoiseField::new(42);
        let roads = RoadLayout::default();

        let x = 20.0f32;
        let z = 7.0f32;
        let v = noise.sample(f64::from(x) * 0.1, f64::from(z) * 0.1);
        let expected = if v > 0.3 {
            SurfaceKind::Dry
        } else if v > -0.2 {
            SurfaceKind::Grassland
        } else {
            SurfaceKind::FertileLowland
        };
        assert_eq!(classify(&noise, &roads, 0.0, x, z), expected);
        // The hill threshold is exclusive: height exactly 1 is lowland.
        assert_eq!(classify(&noise, &roads, 1.0, x, z), expected);
    }

    #[test]
    fn test_surface_colors() {
        assert_eq!(SurfaceKind::Road.color(), Rgb::new(0.5, 0.4, 0.3));
        assert_eq!(SurfaceKind::Mountain.color(), Rgb::new(0.6, 0.5, 0.3));
        assert_eq!(SurfaceKind::Hill.color(), Rgb::new(0.7, 0.6, 0.2));
        assert_eq!(SurfaceKind::Dry.color(), Rgb::new(0.9, 0.8, 0.4));
        assert_eq!(SurfaceKind::Grassland.color(), Rgb::new(0.7, 0.7, 0.3));
        assert_eq!(SurfaceKind::FertileLowland.color(), Rgb::new(0.6, 0.7, 0.2));
    }
}
