//! Performance benchmark comparing the serial and parallel steppers

use std::time::Instant;

use console_life::{Algorithm, Grid};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::new(size, size);
    grid.randomize_with(&mut rng, 0.3);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Stepper Benchmark ===\n");

    let sizes = [12, 50, 100, 250, 500, 1000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
