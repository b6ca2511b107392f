// simulation/mod.rs
// Re-exports and module declarations for simulation submodules

pub mod history;
pub mod population;
pub mod simulation;

pub use simulation::*;
