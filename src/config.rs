// Centralized configuration for simulation parameters

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

// ====================
// Arrhenius Rate Law
// ====================
// Reaction: N2 + 3H2 <-> 2NH3 + heat (exothermic).
// The reverse activation energy is higher than the forward one, so heating
// speeds the reverse reaction up more and the equilibrium shifts toward the
// reactants. This ordering (EA_REV > EA_FWD, large K_REV_PRE) is the whole
// point of the demo; do not retune it casually.
pub const K_FWD_PRE: f32 = 20.0; // Pre-exponential factor, forward
pub const EA_FWD: f32 = 2.0; // Activation energy, forward (R folded in)
pub const K_REV_PRE: f32 = 5000.0; // Pre-exponential factor, reverse
pub const EA_REV: f32 = 8.0; // Activation energy, reverse

/// Rate order of H2 in the forward term. Detuned from the stoichiometric 3
/// to keep the explicit Euler step stable at interactive dt; the tuned
/// dynamics depend on this exact value.
pub const H2_RATE_ORDER: f32 = 2.5;
/// Rate order of NH3 in the reverse term, detuned from 2 for the same reason.
pub const NH3_RATE_ORDER: f32 = 1.8;

// ====================
// Integration
// ====================
/// Base Euler step before the speed multiplier is applied.
pub const BASE_TIMESTEP: f32 = 0.1;
/// Speed multiplier for reaction steps.
pub const SIMULATION_SPEED: f32 = 0.1;
/// Effective timestep. A fixed constant: physics is stepped by a constant dt
/// per frame rather than by wall-clock deltas, so the trajectory is
/// deterministic in step count regardless of rendering jitter.
pub const DEFAULT_DT: f32 = BASE_TIMESTEP * SIMULATION_SPEED;

// ====================
// History
// ====================
/// Capacity of the concentration history window (FIFO, oldest evicted).
pub const HISTORY_LENGTH: usize = 100;
/// Record a history point every Nth integration frame.
pub const HISTORY_SAMPLE_INTERVAL: usize = 5;

// ====================
// Particles/Domain
// ====================
/// Particles per unit concentration.
pub const PARTICLE_SCALE: f32 = 25.0;
/// Simulation domain width, in canvas units.
pub const DOMAIN_WIDTH: f32 = 400.0;
/// Simulation domain height, in canvas units.
pub const DOMAIN_HEIGHT: f32 = 300.0;
/// Base term of the spawn-speed envelope.
pub const SPAWN_SPEED_BASE: f32 = 0.5;
/// Temperature coefficient of the spawn-speed envelope.
pub const SPAWN_SPEED_PER_TEMP: f32 = 0.2;

// ====================
// Initial Mixture
// ====================
pub const INITIAL_N2: f32 = 1.5;
pub const INITIAL_H2: f32 = 1.5;
pub const INITIAL_NH3: f32 = 0.5;
pub const INITIAL_TEMPERATURE: f32 = 1.2;

// ====================
// Input Ranges
// ====================
// Enforced by the slider UI, not re-validated here. Temperature strictly
// positive is a required invariant at the input boundary: the rate law
// divides by T.
pub const CONCENTRATION_MIN: f32 = 0.0;
pub const CONCENTRATION_MAX: f32 = 3.0;
pub const TEMPERATURE_MIN: f32 = 0.8;
pub const TEMPERATURE_MAX: f32 = 3.0;

// ====================
// Frame Loop
// ====================
/// Target frame interval for the headless loop, stand-in for vsync.
pub const FRAME_INTERVAL_SECS: f32 = 1.0 / 60.0;

/// Runtime-tunable subset of the configuration. The simulation re-syncs its
/// copy from [`SIM_CONFIG`] at the top of every step, so edits land between
/// ticks, never inside one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Effective Euler timestep per chemistry frame.
    pub dt: f32,
    /// Particles per unit concentration.
    pub particle_scale: f32,
    /// History window capacity.
    pub history_length: usize,
    /// Record a history point every Nth frame.
    pub history_sample_interval: usize,
    /// Domain width in canvas units.
    pub domain_width: f32,
    /// Domain height in canvas units.
    pub domain_height: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            particle_scale: PARTICLE_SCALE,
            history_length: HISTORY_LENGTH,
            history_sample_interval: HISTORY_SAMPLE_INTERVAL,
            domain_width: DOMAIN_WIDTH,
            domain_height: DOMAIN_HEIGHT,
        }
    }
}

/// Global runtime config, edited by the frontend and read by the simulation.
pub static SIM_CONFIG: Lazy<Mutex<SimConfig>> = Lazy::new(|| Mutex::new(SimConfig::default()));
