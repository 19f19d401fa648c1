use std::io::{self, BufRead};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use console_life::{
    Config, ConsoleRenderer, Renderer, Simulation, presets, render_generation, telemetry,
};

fn main() -> Result<()> {
    let config = Config::parse();
    telemetry::init(config.log_level());

    if config.list_patterns {
        for pattern in presets::all_patterns() {
            println!(
                "{:<12} {}x{}  {}",
                pattern.name, pattern.height, pattern.width, pattern.description
            );
        }
        return Ok(());
    }

    let seed = config.seed_grid().context("failed to build the initial grid")?;
    let population = seed.population();

    let mut renderer = ConsoleRenderer::stdout(!config.no_clear);

    if config.wait {
        render_generation(&mut renderer, &seed, 0).context("failed to draw the seed")?;
        renderer.write_line("Press Enter to start")?;
        io::stdin()
            .lock()
            .read_line(&mut String::new())
            .context("failed to read from stdin")?;
    }

    let delay = config.delay();
    let mut simulation = Simulation::new(seed, config.algorithm);
    info!(population, algorithm = %simulation.algorithm(), "seed ready");
    simulation
        .run_with(config.iterations, &mut renderer, || {
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        })
        .context("failed to write a frame")?;

    Ok(())
}
