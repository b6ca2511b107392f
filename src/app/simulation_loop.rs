use std::sync::atomic::Ordering;
use std::time::Duration;

use crate::commands;
use crate::config;
use crate::simulation::Simulation;
use crate::view::{SimCommand, HISTORY, PARTICLES, PAUSED, SHUTDOWN, SIM_STATE};

/// Copy the simulation's authoritative state into the published statics.
/// Everything the presentation side sees goes through here, once per frame.
pub fn publish(simulation: &Simulation) {
    *SIM_STATE.lock() = simulation.state;
    {
        let mut lock = PARTICLES.lock();
        lock.clear();
        lock.extend_from_slice(simulation.population.particles());
    }
    {
        let mut lock = HISTORY.lock();
        lock.clear();
        lock.extend(simulation.history.iter().copied());
    }
}

/// The frame loop. One iteration per display-refresh interval: drain
/// pending commands, step unless paused, publish, sleep. Exits when
/// SHUTDOWN is set or every command sender is gone.
pub fn run_simulation_loop(rx: std::sync::mpsc::Receiver<SimCommand>, mut simulation: Simulation) {
    let frame_interval = Duration::from_secs_f32(config::FRAME_INTERVAL_SECS);
    publish(&simulation);

    loop {
        if SHUTDOWN.load(Ordering::Relaxed) {
            break;
        }

        // Apply overrides strictly between ticks.
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(cmd) => commands::process_command(cmd, &mut simulation),
                Err(std::sync::mpsc::TryRecvError::Empty) => break,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
        if disconnected {
            break;
        }

        if !PAUSED.load(Ordering::Relaxed) {
            simulation.step();
        }

        publish(&simulation);
        std::thread::sleep(frame_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_mirrors_simulation_state() {
        let mut simulation = Simulation::new();
        for _ in 0..10 {
            simulation.step();
        }
        publish(&simulation);

        let state = *SIM_STATE.lock();
        assert_eq!(state.n2, simulation.state.n2);
        assert_eq!(
            PARTICLES.lock().len(),
            simulation.population.particles().len()
        );
        assert_eq!(HISTORY.lock().len(), simulation.history.len());
    }
}
