mod simulation;

pub use simulation::{RunState, Simulation, run, try_run};
