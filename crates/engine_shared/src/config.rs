// crates/engine_shared/src/config.rs
//! Static gameplay configuration, fixed when the scene is created.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShockwaveConfig {
    /// Seconds for one full run.
    pub duration: f32,
    pub start_value: f32,
    pub end_value: f32,
    /// Name of the material looked up in the host's library.
    pub material: String,
    /// Scalar parameter written on that material.
    pub parameter: String,
}

impl Default for ShockwaveConfig {
    fn default() -> Self {
        Self {
            duration: 1.0,
            start_value: -0.1,
            end_value: 1.0,
            material: "shockwave".to_owned(),
            parameter: "_WaveDistanceFromCenter".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds the pointer must stay down before a drag starts.
    pub hold_threshold: f32,
    pub shockwave: ShockwaveConfig,
    pub inventory_capacity: usize,
    /// Fixed simulation step in seconds.
    pub sim_dt: f32,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hold_threshold: 0.5,
            shockwave: ShockwaveConfig::default(),
            inventory_capacity: 1,
            sim_dt: 1.0 / 60.0,
            log_level: "info".to_owned(),
        }
    }
}
