// simulation/simulation.rs
// Contains the ReactionState and Simulation structs and the per-frame step
// pipeline: kinetics -> Euler update -> clamp -> history sampling ->
// particle reconciliation -> particle kinematics.

use serde::{Deserialize, Serialize};

use crate::config::{self, SimConfig};
use crate::kinetics;
use crate::simulation::history::{History, HistoryPoint};
use crate::simulation::population::Population;

/// The authoritative chemistry state. Concentrations are kept non-negative
/// by the integrator; consumers only ever see copies published through the
/// view module.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ReactionState {
    pub n2: f32,
    pub h2: f32,
    pub nh3: f32,
    pub temperature: f32,
}

impl Default for ReactionState {
    fn default() -> Self {
        Self {
            n2: config::INITIAL_N2,
            h2: config::INITIAL_H2,
            nh3: config::INITIAL_NH3,
            temperature: config::INITIAL_TEMPERATURE,
        }
    }
}

/// The main simulation state and logic.
pub struct Simulation {
    pub state: ReactionState,
    pub frame: usize,
    pub dt: f32,
    pub history: History,
    pub population: Population,
    pub config: SimConfig,
}

impl Simulation {
    pub fn new() -> Self {
        Self::with_state(ReactionState::default(), 0)
    }

    pub fn with_state(state: ReactionState, seed: u64) -> Self {
        let config = config::SIM_CONFIG.lock().clone();
        let mut sim = Self {
            state,
            frame: 0,
            dt: config.dt,
            history: History::new(config.history_length),
            population: Population::new(seed, config.domain_width, config.domain_height),
            config,
        };
        // Seed the pool so the first published frame already matches the
        // initial concentrations.
        sim.population
            .reconcile(&sim.state, sim.config.particle_scale);
        sim
    }

    /// Advance one frame. One chemistry tick and one kinematics tick per
    /// call; history is sampled on the configured cadence from the values
    /// this tick just produced.
    pub fn step(&mut self) {
        // Sync config from the global (updated by the frontend between ticks).
        self.config = config::SIM_CONFIG.lock().clone();
        self.dt = self.config.dt;
        self.history.set_capacity(self.config.history_length);
        self.population
            .set_domain(self.config.domain_width, self.config.domain_height);

        self.step_chemistry();

        self.population
            .reconcile(&self.state, self.config.particle_scale);
        self.population.tick(self.state.temperature);
    }

    /// One explicit Euler step of the rate law, stoichiometry 1:3:2.
    fn step_chemistry(&mut self) {
        let ReactionState {
            n2,
            h2,
            nh3,
            temperature,
        } = self.state;
        let rate = kinetics::net_rate(n2, h2, nh3, temperature);

        // Overshoot past zero is clamped, not signaled; the kinetics clamp
        // its own inputs so a clamped frame stays NaN-free.
        self.state.n2 = (n2 - rate * self.dt).max(0.0);
        self.state.h2 = (h2 - 3.0 * rate * self.dt).max(0.0);
        self.state.nh3 = (nh3 + 2.0 * rate * self.dt).max(0.0);

        self.frame += 1;
        if self.frame % self.config.history_sample_interval == 0 {
            self.history.push(HistoryPoint {
                time: self.frame,
                n2: self.state.n2,
                h2: self.state.h2,
                nh3: self.state.nh3,
            });
        }
    }

    /// Current instantaneous net rate, for diagnostics and tests.
    pub fn current_rate(&self) -> f32 {
        kinetics::net_rate(
            self.state.n2,
            self.state.h2,
            self.state.nh3,
            self.state.temperature,
        )
    }

    /// External override from the slider boundary. The integrator has no
    /// veto; the next tick resumes from the new value.
    pub fn set_n2(&mut self, value: f32) {
        self.state.n2 = value;
    }

    pub fn set_h2(&mut self, value: f32) {
        self.state.h2 = value;
    }

    pub fn set_temperature(&mut self, value: f32) {
        self.state.temperature = value;
    }

    // There is deliberately no set_nh3: ammonia is always derived.

    /// Reset to a fresh state, dropping history and the particle pool.
    pub fn reset(&mut self, state: ReactionState) {
        self.state = state;
        self.frame = 0;
        self.history.clear();
        self.population.clear();
        self.population
            .reconcile(&self.state, self.config.particle_scale);
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
