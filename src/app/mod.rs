use std::sync::mpsc::channel;

use crate::config;
use crate::init_config::InitConfig;
use crate::simulation::Simulation;
use crate::view::SIM_COMMAND_SENDER;

pub mod simulation_loop;

/// Build the simulation from init_config.toml (falling back to defaults),
/// install the command sender, and run the frame loop on the calling thread
/// until `view::SHUTDOWN` is set.
pub fn run() {
    let init = match InitConfig::load_default() {
        Ok(init) => init,
        Err(err) => {
            eprintln!("[app] no init_config.toml ({err}); using defaults");
            InitConfig::default()
        }
    };

    *config::SIM_CONFIG.lock() = init.sim_config();
    let simulation = Simulation::with_state(init.initial_state(), init.seed());

    let (tx, rx) = channel();
    *SIM_COMMAND_SENDER.lock() = Some(tx);

    simulation_loop::run_simulation_loop(rx, simulation);
}

/// Same as [`run`] but on a background thread, for frontends that own the
/// main thread. Tear down by setting `view::SHUTDOWN` and joining.
pub fn spawn() -> std::thread::JoinHandle<()> {
    std::thread::spawn(run)
}
