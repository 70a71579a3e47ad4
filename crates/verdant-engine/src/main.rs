//! # Verdant Engine
//!
//! Headless entry point for Verdant, an infinite procedural landscape.
//!
//! This binary ties the subsystems together:
//! - Worldgen: noise, roads, surface classification, content placement
//! - World: chunk streaming around a moving viewpoint
//!
//! It drives a scripted viewpoint walk and reports streaming statistics; a
//! rendering client would replace the walk with camera input and the logging
//! sink with scene instantiation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod app;
mod config;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Main entry point.
fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("verdant_engine=info".parse()?)
                .add_directive("verdant_world=info".parse()?)
                .add_directive("verdant_worldgen=info".parse()?),
        )
        .init();

    info!("Verdant starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut config = config::EngineConfig::load();
    config.validate();

    app::run(&config)?;

    info!("Verdant shutdown complete");
    Ok(())
}
