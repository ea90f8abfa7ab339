//! Configuration loading
//!
//! The face configuration is the embedded `watch.toml`, parsed by the
//! no_std subset parser in nat24-core. build.rs has already validated it,
//! so a parse failure here means the two parsers disagree.

use defmt::*;

use nat24_core::config::{parse_config, WatchConfig};

/// Parse the embedded configuration, falling back to the stock face
pub fn load(embedded: &str) -> WatchConfig {
    match parse_config(embedded) {
        Ok(config) => {
            info!(
                "Parsed embedded configuration: {:?} {:?} {:?}",
                config.face.clock_style, config.face.tick_unit, config.face.notch_style
            );
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using stock face configuration");
            WatchConfig::default()
        }
    }
}
