// Domain layer - Core business logic
pub mod domain;

// Application layer - Run loop and lifecycle
pub mod application;

// Infrastructure layer - Text output, CLI configuration, logging
pub mod rendering;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, Pattern, presets};
pub use application::{RunState, Simulation, run, try_run};
pub use rendering::{BufferRenderer, ConsoleRenderer, Renderer, render_generation};
pub use config::Config;
pub use error::{LifeError, Result};
