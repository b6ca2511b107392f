// view.rs
// Published, read-only presentation state and the command channel back into
// the simulation. The simulation owns the authoritative state and copies it
// into these statics once per frame; frontends (canvas, chart, sliders) only
// ever read the copies and send SimCommands.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::Sender;

use crate::body::Particle;
use crate::simulation::history::HistoryPoint;
use crate::simulation::ReactionState;

/// Latest published chemistry state.
pub static SIM_STATE: Lazy<Mutex<ReactionState>> =
    Lazy::new(|| Mutex::new(ReactionState::default()));

/// Latest published particle snapshot, refreshed once per frame.
pub static PARTICLES: Lazy<Mutex<Vec<Particle>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Latest published history window, oldest first.
pub static HISTORY: Lazy<Mutex<Vec<HistoryPoint>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Pauses the frame loop without tearing it down.
pub static PAUSED: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(false));

/// Set by the owning frontend on teardown; the loop exits cleanly at the
/// next frame boundary.
pub static SHUTDOWN: Lazy<AtomicBool> = Lazy::new(|| AtomicBool::new(false));

// Simulation commands
// Sent from the input boundary (sliders) to the simulation loop; drained
// between ticks, so a tick never observes a half-applied override.
pub enum SimCommand {
    /// Overwrite the N2 concentration. UI guarantees [0, 3.0].
    SetN2 { value: f32 },
    /// Overwrite the H2 concentration. UI guarantees [0, 3.0].
    SetH2 { value: f32 },
    /// Overwrite the temperature. UI guarantees [0.8, 3.0]; the rate law
    /// requires strictly positive T.
    SetTemperature { value: f32 },
    /// Advance a single frame while paused.
    StepOnce,
    /// Restart from the given state, dropping history and particles.
    Reset { state: ReactionState },
}

pub static SIM_COMMAND_SENDER: Lazy<Mutex<Option<Sender<SimCommand>>>> =
    Lazy::new(|| Mutex::new(None));

/// Convenience for frontends: send a command if the loop is running.
pub fn send_command(cmd: SimCommand) {
    if let Some(sender) = SIM_COMMAND_SENDER.lock().as_ref() {
        if sender.send(cmd).is_err() {
            eprintln!("[view] simulation loop is gone; command dropped");
        }
    }
}
