//! Coherent noise sampling for placement and classification decisions.

use noise::{NoiseFn, Perlin};

/// Coordinate scale of the surface height field (larger = smoother terrain).
const HEIGHT_SCALE: f64 = 0.01;

/// Frequency multiplier of the height detail octave.
const DETAIL_FREQUENCY: f64 = 4.0;

/// Weight of the height detail octave.
const DETAIL_WEIGHT: f64 = 0.1;

/// Deterministic, locally continuous noise field over the world plane.
///
/// Sampling is referentially transparent: the seed is fixed at construction
/// and the same coordinates always yield the same value. Consumers rely on
/// determinism, local continuity, and the `[-1, 1]` output range rather than
/// on the specific algorithm.
#[derive(Debug, Clone)]
pub struct NoiseField {
    /// World seed.
    seed: u32,
    /// Base octave, also used for raw band sampling.
    base: Perlin,
    /// Detail octave for the height field.
    detail: Perlin,
}

impl NoiseField {
    /// Creates a new noise field with the given seed.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            base: Perlin::new(seed),
            detail: Perlin::new(seed.wrapping_add(1)),
        }
    }

    /// Returns the seed this field was constructed with.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Samples the field at the given (pre-scaled) coordinates.
    ///
    /// Returns a value in `[-1, 1]`; nearby coordinates yield similar values.
    #[must_use]
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        self.base.get([x, z]).clamp(-1.0, 1.0)
    }

    /// Samples the surface height field at world coordinates.
    ///
    /// Two-octave value in `[-1, 1]`; callers scale it by their height
    /// amplitude. Feeds the mountain/hill branches of surface classification.
    #[must_use]
    pub fn height(&self, x: f64, z: f64) -> f64 {
        let base = self.base.get([x * HEIGHT_SCALE, z * HEIGHT_SCALE]);
        let detail = self
            .detail
            .get([x * HEIGHT_SCALE * DETAIL_FREQUENCY, z * HEIGHT_SCALE * DETAIL_FREQUENCY])
            * DETAIL_WEIGHT;
        (base + detail).clamp(-1.0, 1.0)
    }
}
