// commands.rs
// Handles processing of SimCommand messages for the simulation

use std::sync::atomic::Ordering;

use crate::simulation::Simulation;
use crate::view::{SimCommand, PAUSED};

/// Process a single SimCommand. Called with the simulation between ticks,
/// so every override lands atomically with respect to a physics step.
pub fn process_command(cmd: SimCommand, simulation: &mut Simulation) {
    match cmd {
        SimCommand::SetN2 { value } => {
            handle_set_n2(simulation, value);
        }

        SimCommand::SetH2 { value } => {
            handle_set_h2(simulation, value);
        }

        SimCommand::SetTemperature { value } => {
            handle_set_temperature(simulation, value);
        }

        SimCommand::StepOnce => {
            handle_step_once(simulation);
        }

        SimCommand::Reset { state } => {
            handle_reset(simulation, state);
        }
    }
}

fn handle_set_n2(simulation: &mut Simulation, value: f32) {
    simulation.set_n2(value);
}

fn handle_set_h2(simulation: &mut Simulation, value: f32) {
    simulation.set_h2(value);
}

fn handle_set_temperature(simulation: &mut Simulation, value: f32) {
    simulation.set_temperature(value);
}

fn handle_step_once(simulation: &mut Simulation) {
    simulation.step();
    PAUSED.store(true, Ordering::Relaxed);
}

fn handle_reset(simulation: &mut Simulation, state: crate::simulation::ReactionState) {
    simulation.reset(state);
}
