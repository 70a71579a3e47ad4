//! Engine configuration.
//!
//! Configurable parameters for the world, streaming, and the scripted walk.
//! Configuration can be loaded from and saved to a TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// Configuration file name.
const CONFIG_FILE: &str = "verdant.toml";

/// Engine configuration parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === World Settings ===
    /// World seed
    pub world_seed: u64,
    /// Chunk edge length in world units
    pub chunk_size: f32,
    /// Half-width of the required square around the viewpoint
    pub load_distance: f32,
    /// Multiple of the load distance beyond which chunks are retired
    pub unload_factor: f32,

    // === Walk Settings ===
    /// Number of simulation ticks to run
    pub ticks: u32,
    /// Viewpoint speed in world units per tick
    pub walk_speed: f32,
    /// Walk heading in degrees (0 = +X)
    pub walk_heading_deg: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // World
            world_seed: 12345,
            chunk_size: 100.0,
            load_distance: 200.0,
            unload_factor: 3.0,

            // Walk
            ticks: 120,
            walk_speed: 5.0,
            walk_heading_deg: 0.0,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the default file location.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Self {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match fs::File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    warn!("Failed to read config file: {e}");
                    return Self::default();
                }

                match toml::from_str(&contents) {
                    Ok(config) => {
                        info!("Loaded config from {}", path.display());
                        config
                    },
                    Err(e) => {
                        warn!("Failed to parse config file: {e}");
                        Self::default()
                    },
                }
            },
            Err(e) => {
                warn!("Failed to open config file: {e}");
                Self::default()
            },
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate and clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.chunk_size = self.chunk_size.clamp(10.0, 1000.0);
        self.load_distance = self.load_distance.clamp(0.0, 5000.0);
        self.unload_factor = self.unload_factor.clamp(1.0, 100.0);
        self.ticks = self.ticks.clamp(1, 100_000);
        self.walk_speed = self.walk_speed.clamp(0.0, 1000.0);
    }
}
