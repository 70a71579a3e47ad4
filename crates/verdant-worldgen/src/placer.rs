//! Decorative content placement for terrain chunks.
//!
//! For each chunk the placer draws per-category counts from configured
//! density ranges, scatters candidate positions across the chunk footprint,
//! and admits each candidate through its category's noise acceptance band so
//! that content density varies smoothly across the world instead of looking
//! chaotic. All draws come from a generator seeded per chunk, so a chunk's
//! content is a pure function of the world seed and its key.

use fastrand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use verdant_common::{ChunkKey, ConfigError, ConfigResult, WorldPos};

use crate::noise_field::NoiseField;
use crate::roads::RoadLayout;
use crate::surface::{classify, Rgb, SurfaceKind};

/// Coordinate scale of tree acceptance sampling.
const TREE_NOISE_SCALE: f64 = 0.02;
/// Coordinate scale of rock acceptance sampling.
const ROCK_NOISE_SCALE: f64 = 0.03;

/// Fraction of the chunk footprint used by trees and flowers.
const CANOPY_FOOTPRINT: f32 = 0.9;
/// Fraction of the chunk footprint used by rocks and ground patches.
const SCATTER_FOOTPRINT: f32 = 0.8;
/// Fraction of the chunk footprint used by road markers.
const MARKER_FOOTPRINT: f32 = 0.1;

/// Flower head colours: red, yellow, purple, blue.
const FLOWER_PALETTE: [Rgb; 4] = [
    Rgb::new(1.0, 0.322, 0.322),
    Rgb::new(1.0, 0.922, 0.231),
    Rgb::new(0.878, 0.251, 0.984),
    Rgb::new(0.129, 0.588, 0.953),
];

/// Ground patch colours: light sand, tan, brown, dark brown.
const PATCH_PALETTE: [Rgb; 4] = [
    Rgb::new(0.902, 0.843, 0.690),
    Rgb::new(0.824, 0.706, 0.549),
    Rgb::new(0.737, 0.604, 0.420),
    Rgb::new(0.651, 0.486, 0.322),
];

/// Category of a decorative placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementKind {
    /// A tree (trunk plus foliage).
    Tree,
    /// A boulder.
    Rock,
    /// A single flower.
    Flower,
    /// A roadside marker stone.
    RoadMarker,
    /// A coloured patch of ground.
    GroundPatch,
}

/// Immutable description of one decorative object within a chunk.
///
/// The core never builds drawable objects; the scene collaborator turns each
/// record into whatever representation it likes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Category of the object.
    pub kind: PlacementKind,
    /// Position relative to the chunk origin, on the ground plane.
    pub offset: [f32; 2],
    /// Euler rotation in radians.
    pub rotation: [f32; 3],
    /// Per-axis scale. Ground patches carry their radius here uniformly.
    pub scale: [f32; 3],
    /// Colour variant, for categories that have one (flowers, patches).
    pub tint: Option<Rgb>,
}

/// Inclusive count range for a decorative category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityRange {
    /// Minimum count per chunk.
    pub min: u32,
    /// Maximum count per chunk (inclusive).
    pub max: u32,
}

impl DensityRange {
    /// Creates a new density range.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Draws a count from this range.
    fn sample(self, rng: &mut Rng) -> u32 {
        rng.u32(self.min..=self.max)
    }

    /// Validates that the range is well-formed.
    fn validate(self) -> ConfigResult<()> {
        if self.min > self.max {
            return Err(ConfigError::InvalidDensityRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Parameters controlling content placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacerConfig {
    /// World seed for deterministic placement.
    pub seed: u64,
    /// Chunk edge length in world units.
    pub chunk_size: f32,
    /// Trees per chunk (before noise gating).
    pub trees: DensityRange,
    /// Rocks per chunk (before noise gating).
    pub rocks: DensityRange,
    /// Flowers per chunk.
    pub flowers: DensityRange,
    /// Road markers per chunk (when the chunk qualifies).
    pub road_markers: DensityRange,
    /// Ground patches per chunk.
    pub ground_patches: DensityRange,
    /// Tree acceptance band, both bounds exclusive.
    pub tree_band: (f64, f64),
    /// Rock acceptance threshold (exclusive lower bound).
    pub rock_threshold: f64,
    /// Per-chunk probability of placing road markers at all.
    pub marker_chance: f32,
    /// Primary-grid band tolerance for road markers. Deliberately looser
    /// than the road surface test.
    pub marker_grid_tolerance: f32,
    /// Scale applied to the height field before classification.
    pub height_amplitude: f32,
    /// Road network geometry.
    pub roads: RoadLayout,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            chunk_size: 100.0,
            trees: DensityRange::new(5, 12),
            rocks: DensityRange::new(1, 3),
            flowers: DensityRange::new(5, 14),
            road_markers: DensityRange::new(3, 6),
            ground_patches: DensityRange::new(5, 9),
            tree_band: (-0.2, 0.3),
            rock_threshold: 0.4,
            marker_chance: 0.3,
            marker_grid_tolerance: 10.0,
            height_amplitude: 6.0,
            roads: RoadLayout::default(),
        }
    }
}

impl PlacerConfig {
    /// Creates a config with the given seed and defaults otherwise.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.chunk_size.is_finite() && self.chunk_size > 0.0) {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        self.trees.validate()?;
        self.rocks.validate()?;
        self.flowers.validate()?;
        self.road_markers.validate()?;
        self.ground_patches.validate()?;
        Ok(())
    }

    /// Returns whether a tree candidate with the given noise value is
    /// admitted. Both band edges are exclusive.
    #[must_use]
    pub fn admits_tree(&self, noise_value: f64) -> bool {
        noise_value > self.tree_band.0 && noise_value < self.tree_band.1
    }

    /// Returns whether a rock candidate with the given noise value is
    /// admitted. The threshold itself is rejected.
    #[must_use]
    pub fn admits_rock(&self, noise_value: f64) -> bool {
        noise_value > self.rock_threshold
    }
}

/// Everything generated for one chunk: its surface classification and the
/// ordered decorative placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkContent {
    /// Ground surface classification at the chunk origin.
    pub surface: SurfaceKind,
    /// Placements in emission order: trees, rocks, flowers, road markers,
    /// ground patches.
    pub placements: Vec<Placement>,
}

/// Procedural decorative content placer.
///
/// Owns the noise field and road layout; `generate` is referentially
/// transparent per chunk key.
#[derive(Debug)]
pub struct ContentPlacer {
    /// Configuration.
    config: PlacerConfig,
    /// Coherent noise shared by acceptance bands, heights, and biomes.
    noise: NoiseField,
}

impl ContentPlacer {
    /// Creates a new placer from the given configuration.
    #[must_use]
    pub fn new(config: PlacerConfig) -> Self {
        let noise = NoiseField::new(config.seed as u32);
        info!(
            seed = config.seed,
            chunk_size = config.chunk_size,
            "content placer initialized"
        );
        Self { config, noise }
    }

    /// Creates a placer with the given seed and defaults otherwise.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(PlacerConfig::with_seed(seed))
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PlacerConfig {
        &self.config
    }

    /// Returns the noise field.
    #[must_use]
    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    /// Returns the chunk edge length.
    #[must_use]
    pub fn chunk_size(&self) -> f32 {
        self.config.chunk_size
    }

    /// Generates the surface classification and placement list for the chunk
    /// with the given key.
    ///
    /// Deterministic: the same seed and key always produce identical content,
    /// including across placer instances.
    #[must_use]
    pub fn generate(&self, key: ChunkKey) -> ChunkContent {
        let origin = key.world_origin(self.config.chunk_size);
        let mut rng = Rng::with_seed(self.chunk_seed(key));

        let mut placements = Vec::new();
        self.place_trees(origin, &mut rng, &mut placements);
        self.place_rocks(origin, &mut rng, &mut placements);
        self.place_flowers(&mut rng, &mut placements);
        self.place_road_markers(origin, &mut rng, &mut placements);
        self.place_ground_patches(&mut rng, &mut placements);

        let height = (self.noise.height(f64::from(origin.x), f64::from(origin.z))
            * f64::from(self.config.height_amplitude)) as f32;
        let surface = classify(&self.noise, &self.config.roads, height, origin.x, origin.z);

        debug!(
            key.x,
            key.z,
            ?surface,
            placements = placements.len(),
            "generated chunk content"
        );

        ChunkContent {
            surface,
            placements,
        }
    }

    /// Derives the RNG seed for a chunk from the world seed and its key.
    fn chunk_seed(&self, key: ChunkKey) -> u64 {
        let x = key.x as u64;
        let z = key.z as u64;
        self.config
            .seed
            .wrapping_mul(0x0005_DEEC_E66D)
            .wrapping_add(x.wrapping_mul(0x0123_4567))
            .wrapping_add(z.wrapping_mul(0x0765_4321))
    }

    /// Draws an offset uniformly within the given fraction of the chunk
    /// footprint, centred on the chunk origin.
    fn local_offset(&self, rng: &mut Rng, footprint: f32) -> [f32; 2] {
        [
            (rng.f32() - 0.5) * self.config.chunk_size * footprint,
            (rng.f32() - 0.5) * self.config.chunk_size * footprint,
        ]
    }

    /// Scatters trees, admitted where the tree noise band allows woodland.
    fn place_trees(&self, origin: WorldPos, rng: &mut Rng, out: &mut Vec<Placement>) {
        let count = self.config.trees.sample(rng);
        for _ in 0..count {
            let offset = self.local_offset(rng, CANOPY_FOOTPRINT);
            let v = self.noise.sample(
                f64::from(origin.x + offset[0]) * TREE_NOISE_SCALE,
                f64::from(origin.z + offset[1]) * TREE_NOISE_SCALE,
            );
            if !self.config.admits_tree(v) {
                continue;
            }
            let scale = [
                0.8 + rng.f32() * 0.4,
                0.8 + rng.f32() * 0.4,
                0.8 + rng.f32() * 0.4,
            ];
            out.push(Placement {
                kind: PlacementKind::Tree,
                offset,
                rotation: [0.0; 3],
                scale,
                tint: None,
            });
        }
    }

    /// Scatters rocks, admitted only in rocky areas of the noise field.
    fn place_rocks(&self, origin: WorldPos, rng: &mut Rng, out: &mut Vec<Placement>) {
        let count = self.config.rocks.sample(rng);
        for _ in 0..count {
            let offset = self.local_offset(rng, SCATTER_FOOTPRINT);
            let v = self.noise.sample(
                f64::from(origin.x + offset[0]) * ROCK_NOISE_SCALE,
                f64::from(origin.z + offset[1]) * ROCK_NOISE_SCALE,
            );
            if !self.config.admits_rock(v) {
                continue;
            }
            let rotation = [
                rng.f32() * std::f32::consts::PI,
                rng.f32() * std::f32::consts::PI,
                rng.f32() * std::f32::consts::PI,
            ];
            let scale = [
                0.5 + rng.f32() * 0.5,
                0.5 + rng.f32() * 0.5,
                0.5 + rng.f32() * 0.5,
            ];
            out.push(Placement {
                kind: PlacementKind::Rock,
                offset,
                rotation,
                scale,
                tint: None,
            });
        }
    }

    /// Scatters flowers unconditionally.
    fn place_flowers(&self, rng: &mut Rng, out: &mut Vec<Placement>) {
        let count = self.config.flowers.sample(rng);
        for _ in 0..count {
            let offset = self.local_offset(rng, CANOPY_FOOTPRINT);
            let tint = FLOWER_PALETTE[rng.usize(0..FLOWER_PALETTE.len())];
            out.push(Placement {
                kind: PlacementKind::Flower,
                offset,
                rotation: [0.0; 3],
                scale: [1.0; 3],
                tint: Some(tint),
            });
        }
    }

    /// Places marker stones along primary roads, on a per-chunk coin flip.
    ///
    /// The qualifying test is the loose primary-grid band, not
    /// [`RoadLayout::is_road`]; markers and coloured road surfaces are not
    /// always coincident.
    fn place_road_markers(&self, origin: WorldPos, rng: &mut Rng, out: &mut Vec<Placement>) {
        if rng.f32() >= self.config.marker_chance {
            return;
        }
        if !self
            .config
            .roads
            .near_primary_grid(origin.x, origin.z, self.config.marker_grid_tolerance)
        {
            return;
        }

        let count = self.config.road_markers.sample(rng);
        for _ in 0..count {
            let offset = self.local_offset(rng, MARKER_FOOTPRINT);
            let rotation = [rng.f32() * 0.1, 0.0, rng.f32() * 0.1];
            out.push(Placement {
                kind: PlacementKind::RoadMarker,
                offset,
                rotation,
                scale: [1.0; 3],
                tint: None,
            });
        }
    }

    /// Scatters coloured ground patches unconditionally.
    fn place_ground_patches(&self, rng: &mut Rng, out: &mut Vec<Placement>) {
        let count = self.config.ground_patches.sample(rng);
        for _ in 0..count {
            let offset = self.local_offset(rng, SCATTER_FOOTPRINT);
            let radius = 2.0 + rng.f32() * 3.0;
            let tint = PATCH_PALETTE[rng.usize(0..PATCH_PALETTE.len())];
            out.push(Placement {
                kind: PlacementKind::GroundPatch,
                offset,
                rotation: [0.0; 3],
                scale: [radius; 3],
                tint: Some(tint),
            });
        }
    }
}
