//! Chunk streaming around a moving viewpoint.
//!
//! Each tick the streamer computes the set of chunk keys the viewpoint
//! currently requires, generates any it has not seen, hands the resulting
//! descriptors to the scene collaborator, and retires resident chunks that
//! have fallen far behind. Generation is synchronous and completes within
//! the tick that first requires a chunk.

use std::collections::HashSet;

use tracing::{debug, info};
use verdant_common::{ChunkKey, ConfigError, ConfigResult, WorldPos};
use verdant_worldgen::ContentPlacer;

use crate::chunk::ChunkDescriptor;
use crate::scene::SceneSink;

/// Default chunk edge length in world units.
pub const DEFAULT_CHUNK_SIZE: f32 = 100.0;

/// Default half-width of the required square around the viewpoint.
pub const DEFAULT_LOAD_DISTANCE: f32 = 200.0;

/// Default multiple of the load distance beyond which chunks are retired.
pub const DEFAULT_UNLOAD_FACTOR: f32 = 3.0;

/// Configuration for the chunk streamer.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamingConfig {
    /// Chunk edge length in world units.
    pub chunk_size: f32,
    /// Half-width of the required square around the viewpoint. Despite the
    /// name this is an axis-aligned bound, not a circular radius.
    pub load_distance: f32,
    /// Chunks whose origin is further than `load_distance * unload_factor`
    /// from the viewpoint on either axis are retired. Use `f32::INFINITY`
    /// to retain every chunk forever.
    pub unload_factor: f32,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            load_distance: DEFAULT_LOAD_DISTANCE,
            unload_factor: DEFAULT_UNLOAD_FACTOR,
        }
    }
}

impl StreamingConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.chunk_size.is_finite() && self.chunk_size > 0.0) {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        if !(self.load_distance.is_finite() && self.load_distance >= 0.0) {
            return Err(ConfigError::InvalidLoadDistance(self.load_distance));
        }
        if !(self.unload_factor >= 1.0) {
            return Err(ConfigError::InvalidUnloadFactor(self.unload_factor));
        }
        Ok(())
    }
}

/// Statistics for the chunk streamer.
///
/// The cumulative counters only grow; they expose long-session growth as an
/// observable quantity rather than an error.
#[derive(Debug, Clone, Default)]
pub struct StreamingStats {
    /// Chunks currently resident in the scene.
    pub resident: usize,
    /// Total chunks generated over the streamer's lifetime.
    pub chunks_generated: u64,
    /// Total placement records emitted over the streamer's lifetime.
    pub placements_emitted: u64,
    /// Chunks generated during the last tick.
    pub generated_this_tick: usize,
    /// Chunks retired during the last tick.
    pub evicted_this_tick: usize,
}

/// Streams chunks in and out around the viewpoint.
pub struct ChunkStreamer {
    /// Configuration.
    config: StreamingConfig,
    /// Content generator.
    placer: ContentPlacer,
    /// Keys of chunks currently live in the scene.
    resident: HashSet<ChunkKey>,
    /// Statistics.
    stats: StreamingStats,
}

impl ChunkStreamer {
    /// Creates a new streamer.
    ///
    /// The streaming grid and the placer must agree on the chunk size.
    #[must_use]
    pub fn new(config: StreamingConfig, placer: ContentPlacer) -> Self {
        assert!(
            (config.chunk_size - placer.chunk_size()).abs() < f32::EPSILON,
            "streaming chunk size {} does not match placer chunk size {}",
            config.chunk_size,
            placer.chunk_size()
        );
        info!(
            chunk_size = config.chunk_size,
            load_distance = config.load_distance,
            unload_factor = config.unload_factor,
            "chunk streamer ready"
        );
        Self {
            config,
            placer,
            resident: HashSet::new(),
            stats: StreamingStats::default(),
        }
    }

    /// Creates a streamer with default configuration and the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StreamingConfig::default(), ContentPlacer::with_seed(seed))
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &StreamingConfig {
        &self.config
    }

    /// Returns the content placer.
    #[must_use]
    pub fn placer(&self) -> &ContentPlacer {
        &self.placer
    }

    /// Returns current statistics.
    #[must_use]
    pub fn stats(&self) -> &StreamingStats {
        &self.stats
    }

    /// Returns whether a chunk is currently resident.
    #[must_use]
    pub fn is_resident(&self, key: ChunkKey) -> bool {
        self.resident.contains(&key)
    }

    /// Returns the number of resident chunks.
    #[must_use]
    pub fn resident_count(&self) -> usize {
        self.resident.len()
    }

    /// Computes the keys the viewpoint currently requires, in a stable
    /// row-major order.
    ///
    /// Candidates are enumerated on the chunk grid out to
    /// `ceil(load_distance / chunk_size)` cells from the viewpoint's cell,
    /// then admitted by the axis-aligned distance test. The admitted set
    /// forms a square of half-width `load_distance` centred on the
    /// viewpoint, snapped to the grid.
    #[must_use]
    pub fn required_keys(&self, viewpoint: WorldPos) -> Vec<ChunkKey> {
        let chunk_size = self.config.chunk_size;
        let load = self.config.load_distance;
        let radius = (load / chunk_size).ceil() as i32;
        let center = viewpoint.chunk_key(chunk_size);

        let mut keys = Vec::new();
        for i in -radius..=radius {
            for j in -radius..=radius {
                let key = ChunkKey::new(center.x + i, center.z + j);
                let origin = key.world_origin(chunk_size);
                if (origin.x - viewpoint.x).abs() <= load
                    && (origin.z - viewpoint.z).abs() <= load
                {
                    keys.push(key);
                }
            }
        }
        keys
    }

    /// Generates and emits the chunk for `key` unless it is already
    /// resident.
    ///
    /// Idempotent: a resident key is a no-op and the sink sees nothing.
    /// Returns whether a chunk was generated.
    pub fn ensure_generated(&mut self, key: ChunkKey, sink: &mut dyn SceneSink) -> bool {
        if self.resident.contains(&key) {
            return false;
        }

        let origin = key.world_origin(self.config.chunk_size);
        let content = self.placer.generate(key);
        self.resident.insert(key);
        self.stats.chunks_generated += 1;
        self.stats.placements_emitted += content.placements.len() as u64;
        sink.chunk_ready(ChunkDescriptor::new(key, origin, content));
        true
    }

    /// Per-tick driver: ensures every required chunk exists, then retires
    /// chunks beyond the unload distance.
    ///
    /// Returns the number of chunks generated this tick.
    pub fn update(&mut self, viewpoint: WorldPos, sink: &mut dyn SceneSink) -> usize {
        let mut generated = 0;
        for key in self.required_keys(viewpoint) {
            if self.ensure_generated(key, sink) {
                generated += 1;
            }
        }

        let evicted = self.retire_distant(viewpoint, sink);

        self.stats.generated_this_tick = generated;
        self.stats.evicted_this_tick = evicted;
        self.stats.resident = self.resident.len();

        if generated > 0 || evicted > 0 {
            debug!(
                generated,
                evicted,
                resident = self.resident.len(),
                "streamed chunks"
            );
        }
        generated
    }

    /// Retires resident chunks beyond the unload distance on either axis.
    ///
    /// Content is a pure function of the world seed and chunk key, so a
    /// retired chunk that re-enters range regenerates identically.
    fn retire_distant(&mut self, viewpoint: WorldPos, sink: &mut dyn SceneSink) -> usize {
        let limit = self.config.load_distance * self.config.unload_factor;
        let chunk_size = self.config.chunk_size;

        let mut to_retire: Vec<ChunkKey> = self
            .resident
            .iter()
            .copied()
            .filter(|key| {
                let origin = key.world_origin(chunk_size);
                (origin.x - viewpoint.x).abs() > limit || (origin.z - viewpoint.z).abs() > limit
            })
            .collect();
        // Set iteration order is arbitrary; notify the sink deterministically.
        to_retire.sort_unstable_by_key(|key| (key.x, key.z));

        for key in &to_retire {
            self.resident.remove(key);
            sink.chunk_retired(*key);
        }
        to_retire.len()
    }
}

impl std::fmt::Debug for ChunkStreamer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkStreamer")
            .field("config", &self.config)
            .field("resident", &self.resident.len())
            .field("chunks_generated", &self.stats.chunks_generated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::RecordingSink;
    use std::collections::HashSet;

    #[test]
    fn test_streaming_config_default() {
        let config = StreamingConfig::default();
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.load_distance, DEFAULT_LOAD_DISTANCE);
        assert_eq!(config.unload_factor, DEFAULT_UNLOAD_FACTOR);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_streaming_config_rejects_bad_values() {
        let config = StreamingConfig {
            chunk_size: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidChunkSize(_))
        ));

        let config = StreamingConfig {
            unload_factor: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUnloadFactor(_))
        ));
    }

    #[test]
    fn test_required_keys_exact_5x5_grid() {
        let streamer = ChunkStreamer::with_seed(1);
        let keys = streamer.required_keys(WorldPos::new(0.0, 0.0));

        // chunk_size = 100, load_distance = 200: the 5x5 grid of origins
        // {-200,-100,0,100,200} on both axes, in row-major order.
        let mut expected = Vec::new();
        for i in -2..=2 {
            for j in -2..=2 {
                expected.push(ChunkKey::new(i, j));
            }
        }
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_required_keys_off_center_viewpoint() {
        let streamer = ChunkStreamer::with_seed(1);
        let keys = streamer.required_keys(WorldPos::new(50.0, 50.0));

        // Origins must satisfy |origin - 50| <= 200 on both axes, so each
        // axis admits {-100, 0, 100, 200} but not -200 (distance 250).
        assert_eq!(keys.len(), 16);
        for key in &keys {
            assert!((-1..=2).contains(&key.x));
            assert!((-1..=2).contains(&key.z));
        }
    }

    #[test]
    fn test_ensure_generated_is_idempotent() {
        let mut streamer = ChunkStreamer::with_seed(42);
        let mut sink = RecordingSink::new();
        let key = ChunkKey::new(3, -4);

        assert!(streamer.ensure_generated(key, &mut sink));
        assert!(!streamer.ensure_generated(key, &mut sink));

        assert_eq!(sink.ready().len(), 1);
        assert_eq!(streamer.stats().chunks_generated, 1);
        assert!(streamer.is_resident(key));
    }

    #[test]
    fn test_update_generates_required_square() {
        let mut streamer = ChunkStreamer::with_seed(42);
        let mut sink = RecordingSink::new();

        let generated = streamer.update(WorldPos::new(0.0, 0.0), &mut sink);

        assert_eq!(generated, 25);
        assert_eq!(streamer.resident_count(), 25);
        assert_eq!(sink.ready().len(), 25);
        assert_eq!(streamer.stats().resident, 25);
        assert!(streamer.stats().placements_emitted > 0);

        // A second tick at the same viewpoint changes nothing.
        let again = streamer.update(WorldPos::new(0.0, 0.0), &mut sink);
        assert_eq!(again, 0);
        assert_eq!(sink.ready().len(), 25);
    }

    #[test]
    fn test_walk_grows_set_without_duplicates() {
        let mut streamer = ChunkStreamer::with_seed(7);
        let mut sink = RecordingSink::new();

        let mut resident_before = 0;
        for step in 0..=6 {
            let x = step as f32 * 50.0; // walk from 0 to 300
            streamer.update(WorldPos::new(x, 0.0), &mut sink);

            // Previously generated chunks stay resident at the default
            // unload factor; the leading edge only adds.
            assert!(streamer.resident_count() >= resident_before);
            resident_before = streamer.resident_count();
        }

        let keys = sink.ready_keys();
        let unique: HashSet<_> = keys.iter().copied().collect();
        assert_eq!(keys.len(), unique.len(), "a descriptor was emitted twice");
        assert!(sink.retired().is_empty());
        assert_eq!(streamer.resident_count(), keys.len());
    }

    #[test]
    fn test_retires_chunks_beyond_unload_distance() {
        let config = StreamingConfig {
            unload_factor: 1.0,
            ..Default::default()
        };
        let mut streamer = ChunkStreamer::new(config, ContentPlacer::with_seed(7));
        let mut sink = RecordingSink::new();

        streamer.update(WorldPos::new(0.0, 0.0), &mut sink);
        assert_eq!(streamer.resident_count(), 25);

        // Jump far away: everything from the first tick is out of range.
        streamer.update(WorldPos::new(1000.0, 0.0), &mut sink);
        assert_eq!(sink.retired().len(), 25);
        assert_eq!(streamer.resident_count(), 25);
        assert_eq!(streamer.stats().evicted_this_tick, 25);
        for key in sink.retired() {
            assert!(!streamer.is_resident(*key));
        }
    }

    #[test]
    fn test_reentry_regenerates_identical_content() {
        let config = StreamingConfig {
            unload_factor: 1.0,
            ..Default::default()
        };
        let mut streamer = ChunkStreamer::new(config, ContentPlacer::with_seed(99));
        let mut sink = RecordingSink::new();

        streamer.update(WorldPos::new(0.0, 0.0), &mut sink);
        streamer.update(WorldPos::new(1000.0, 0.0), &mut sink);
        streamer.update(WorldPos::new(0.0, 0.0), &mut sink);

        // The origin chunk was emitted twice (before and after retirement);
        // both descriptors must be identical.
        let emissions: Vec<_> = sink
            .ready()
            .iter()
            .filter(|c| c.key == ChunkKey::new(0, 0))
            .collect();
        assert_eq!(emissions.len(), 2);
        assert_eq!(emissions[0], emissions[1]);
    }

    #[test]
    fn test_streamers_with_same_seed_agree() {
        let mut streamer1 = ChunkStreamer::with_seed(1234);
        let mut streamer2 = ChunkStreamer::with_seed(1234);
        let mut sink1 = RecordingSink::new();
        let mut sink2 = RecordingSink::new();

        for step in 0..4 {
            let pos = WorldPos::new(step as f32 * 75.0, step as f32 * -30.0);
            streamer1.update(pos, &mut sink1);
            streamer2.update(pos, &mut sink2);
        }

        assert_eq!(sink1.ready(), sink2.ready());
    }

    proptest::proptest! {
        /// The admitted set is an axis-aligned square: every admitted origin
        /// lies within the load distance, and the per-axis key ranges cannot
        /// be extended without violating the bound.
        #[test]
        fn prop_required_keys_form_maximal_square(
            vx in -5000.0f32..5000.0,
            vz in -5000.0f32..5000.0,
        ) {
            let streamer = ChunkStreamer::with_seed(1);
            let viewpoint = WorldPos::new(vx, vz);
            let keys = streamer.required_keys(viewpoint);

            let chunk_size = streamer.config().chunk_size;
            let load = streamer.config().load_distance;

            proptest::prop_assert!(!keys.is_empty());
            for key in &keys {
                let origin = key.world_origin(chunk_size);
                proptest::prop_assert!((origin.x - vx).abs() <= load);
                proptest::prop_assert!((origin.z - vz).abs() <= load);
            }

            let min_x = keys.iter().map(|k| k.x).min().unwrap_or(0);
            let max_x = keys.iter().map(|k| k.x).max().unwrap_or(0);
            let min_z = keys.iter().map(|k| k.z).min().unwrap_or(0);
            let max_z = keys.iter().map(|k| k.z).max().unwrap_or(0);

            // The set is the full rectangle of its bounds...
            let width = (max_x - min_x + 1) as usize;
            let height = (max_z - min_z + 1) as usize;
            proptest::prop_assert_eq!(keys.len(), width * height);

            // ...and one cell further out violates the bound on that axis.
            let below = ChunkKey::new(min_x - 1, min_z).world_origin(chunk_size);
            let above = ChunkKey::new(max_x + 1, min_z).world_origin(chunk_size);
            proptest::prop_assert!((below.x - vx).abs() > load);
            proptest::prop_assert!((above.x - vx).abs() > load);
            let near = ChunkKey::new(min_x, min_z - 1).world_origin(chunk_size);
            let far = ChunkKey::new(min_x, max_z + 1).world_origin(chunk_size);
            proptest::prop_assert!((near.z - vz).abs() > load);
            proptest::prop_assert!((far.z - vz).abs() > load);
        }
    }

    #[test]
    fn test_infinite_unload_factor_never_retires() {
        let config = StreamingConfig {
            unload_factor: f32::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        let mut streamer = ChunkStreamer::new(config, ContentPlacer::with_seed(5));
        let mut sink = RecordingSink::new();

        streamer.update(WorldPos::new(0.0, 0.0), &mut sink);
        streamer.update(WorldPos::new(10_000.0, 0.0), &mut sink);
        assert!(sink.retired().is_empty());
        assert_eq!(streamer.resident_count(), 50);
    }
}
