// init_config.rs
// Handles loading and parsing the startup configuration from init_config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config;
use crate::simulation::ReactionState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    pub simulation: Option<SimulationConfig>,
    pub mixture: Option<MixtureConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Optional timestep override. Falls back to the default when omitted.
    pub dt: Option<f32>,
    /// Optional particles-per-concentration-unit override.
    pub particle_scale: Option<f32>,
    /// Optional history window capacity.
    pub history_length: Option<usize>,
    /// Optional domain width in canvas units.
    pub domain_width: Option<f32>,
    /// Optional domain height in canvas units.
    pub domain_height: Option<f32>,
    /// Seed for the particle spawn RNG. Defaults to 0 for reproducible runs.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MixtureConfig {
    /// Initial N2 concentration.
    pub n2: Option<f32>,
    /// Initial H2 concentration.
    pub h2: Option<f32>,
    /// Initial NH3 concentration.
    pub nh3: Option<f32>,
    /// Initial temperature; must be strictly positive.
    pub temperature: Option<f32>,
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: InitConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from_file("init_config.toml")
    }

    /// Initial chemistry state, filling gaps from the built-in seed values.
    pub fn initial_state(&self) -> ReactionState {
        let defaults = ReactionState::default();
        match &self.mixture {
            Some(mixture) => ReactionState {
                n2: mixture.n2.unwrap_or(defaults.n2),
                h2: mixture.h2.unwrap_or(defaults.h2),
                nh3: mixture.nh3.unwrap_or(defaults.nh3),
                temperature: mixture.temperature.unwrap_or(defaults.temperature),
            },
            None => defaults,
        }
    }

    pub fn seed(&self) -> u64 {
        self.simulation
            .as_ref()
            .and_then(|s| s.seed)
            .unwrap_or(0)
    }

    /// Fold overrides into a runtime SimConfig.
    pub fn sim_config(&self) -> config::SimConfig {
        let mut cfg = config::SimConfig::default();
        if let Some(sim) = &self.simulation {
            if let Some(dt) = sim.dt {
                cfg.dt = dt;
            }
            if let Some(scale) = sim.particle_scale {
                cfg.particle_scale = scale;
            }
            if let Some(len) = sim.history_length {
                cfg.history_length = len;
            }
            if let Some(width) = sim.domain_width {
                cfg.domain_width = width;
            }
            if let Some(height) = sim.domain_height {
                cfg.domain_height = height;
            }
        }
        cfg
    }
}
