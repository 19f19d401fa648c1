use std::convert::Infallible;
use std::io;

use tracing::{debug, info};

use crate::domain::{Algorithm, Grid};
use crate::rendering::{Renderer, render_generation};

/// Lifecycle of a simulation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Seeded, no generation computed yet
    Idle,
    /// Inside the run loop
    Running,
    /// Iteration budget exhausted
    Stopped,
}

/// Drive `iterations` generations with a fallible render callback.
///
/// Each step advances the grid with `step`, hands the new grid and its
/// generation index (1 for the first step) to `render`, then calls
/// `post_step`. The first render error ends the loop and is returned.
/// Returns the final grid.
pub fn try_run<S, R, P, E>(
    mut grid: Grid,
    iterations: u64,
    mut step: S,
    mut render: R,
    mut post_step: P,
) -> Result<Grid, E>
where
    S: FnMut(&Grid) -> Grid,
    R: FnMut(&Grid, u64) -> Result<(), E>,
    P: FnMut(),
{
    for generation in 1..=iterations {
        grid = step(&grid);
        render(&grid, generation)?;
        post_step();
    }
    Ok(grid)
}

/// Drive exactly `iterations` generations.
///
/// The loop never stops early, even when the grid dies out.
pub fn run<S, R, P>(grid: Grid, iterations: u64, step: S, mut render: R, post_step: P) -> Grid
where
    S: FnMut(&Grid) -> Grid,
    R: FnMut(&Grid, u64),
    P: FnMut(),
{
    let result = try_run(
        grid,
        iterations,
        step,
        |grid, generation| {
            render(grid, generation);
            Ok::<(), Infallible>(())
        },
        post_step,
    );
    match result {
        Ok(grid) => grid,
        Err(never) => match never {},
    }
}

/// Simulation orchestrates a single run of the automaton.
/// This is the application layer that coordinates domain logic and output.
pub struct Simulation {
    grid: Grid,
    algorithm: Algorithm,
    generation: u64,
    state: RunState,
}

impl Simulation {
    /// Create a simulation from a seed grid (generation 0)
    pub fn new(grid: Grid, algorithm: Algorithm) -> Self {
        Self {
            grid,
            algorithm,
            generation: 0,
            state: RunState::Idle,
        }
    }

    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Index of the most recently computed generation
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Run `iterations` generations, rendering each one.
    ///
    /// Panics unless the simulation is still idle: a run happens once.
    pub fn run_with<R, P>(
        &mut self,
        iterations: u64,
        renderer: &mut R,
        post_step: P,
    ) -> io::Result<()>
    where
        R: Renderer + ?Sized,
        P: FnMut(),
    {
        assert_eq!(self.state, RunState::Idle, "simulation has already been run");
        self.state = RunState::Running;

        let (rows, cols) = self.grid.dimensions();
        info!(rows, cols, iterations, algorithm = %self.algorithm, "simulation started");

        let algorithm = self.algorithm;
        let mut last_generation = self.generation;
        let result = try_run(
            self.grid.clone(),
            iterations,
            |grid| algorithm.step(grid),
            |grid, generation| {
                last_generation = generation;
                debug!(generation, population = grid.population(), "generation computed");
                render_generation(&mut *renderer, grid, generation)
            },
            post_step,
        );

        self.state = RunState::Stopped;
        self.generation = last_generation;
        let grid = result?;
        info!(
            generations = self.generation,
            population = grid.population(),
            extinct = grid.is_extinct(),
            "simulation stopped"
        );
        self.grid = grid;
        Ok(())
    }
}
