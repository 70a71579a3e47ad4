//! Headless walk driver.
//!
//! Moves a viewpoint along a straight-line path at fixed speed and feeds it
//! to the chunk streamer every tick, standing in for the interactive camera
//! of a full client.

use anyhow::Result;
use tracing::{debug, info};
use verdant_common::{ChunkKey, WorldPos};
use verdant_world::{ChunkDescriptor, ChunkStreamer, SceneSink, StreamingConfig, StreamingStats};
use verdant_worldgen::{ContentPlacer, PlacerConfig};

use crate::config::EngineConfig;

/// Sink that logs chunk lifecycle events instead of building scene objects.
#[derive(Debug, Default)]
struct LoggingSink {
    ready: u64,
    retired: u64,
}

impl SceneSink for LoggingSink {
    fn chunk_ready(&mut self, chunk: ChunkDescriptor) {
        self.ready += 1;
        debug!(
            x = chunk.key.x,
            z = chunk.key.z,
            surface = ?chunk.surface,
            placements = chunk.placement_count(),
            "chunk ready"
        );
    }

    fn chunk_retired(&mut self, key: ChunkKey) {
        self.retired += 1;
        debug!(x = key.x, z = key.z, "chunk retired");
    }
}

/// Runs the scripted walk and returns the final streaming statistics.
pub fn run(config: &EngineConfig) -> Result<StreamingStats> {
    let placer_config = PlacerConfig {
        seed: config.world_seed,
        chunk_size: config.chunk_size,
        ..Default::default()
    };
    placer_config.validate()?;

    let streaming_config = StreamingConfig {
        chunk_size: config.chunk_size,
        load_distance: config.load_distance,
        unload_factor: config.unload_factor,
    };
    streaming_config.validate()?;

    let mut streamer = ChunkStreamer::new(streaming_config, ContentPlacer::new(placer_config));
    let mut sink = LoggingSink::default();

    let heading = config.walk_heading_deg.to_radians();
    let step_x = heading.cos() * config.walk_speed;
    let step_z = heading.sin() * config.walk_speed;

    let mut viewpoint = WorldPos::new(0.0, 0.0);
    for tick in 0..config.ticks {
        streamer.update(viewpoint, &mut sink);
        if tick % 60 == 0 {
            let stats = streamer.stats();
            info!(
                tick,
                x = viewpoint.x,
                z = viewpoint.z,
                resident = stats.resident,
                generated = stats.chunks_generated,
                "walking"
            );
        }
        viewpoint = WorldPos::new(viewpoint.x + step_x, viewpoint.z + step_z);
    }

    let stats = streamer.stats().clone();
    info!(
        ticks = config.ticks,
        resident = stats.resident,
        chunks_generated = stats.chunks_generated,
        placements_emitted = stats.placements_emitted,
        ready = sink.ready,
        retired = sink.retired,
        "walk complete"
    );
    Ok(stats)
}
