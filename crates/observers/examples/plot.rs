//! Interactive view of the secant method.
//!
//! Solves a simple equation, prints the iteration table, and opens a plot
//! window showing the curve with every secant line the solver drew.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- dottie
//! cargo run --example plot --features plot -- sqrt2
//! cargo run --example plot --features plot -- cubic
//! ```
//!
//! # Modes
//!
//! - **dottie** — The fixed point of cos x, from 0 and 1. Converges to
//!   ≈ 0.7391 in a handful of steps.
//! - **sqrt2** — The positive root of x² − 2, from 1 and 2.
//! - **cubic** — The triple root of x³ at zero, from 1 and 0.9. Convergence is
//!   only linear, so the secant lines creep toward the root.

use std::{error::Error, io};

use secant_core::Observer;
use secant_observers::{SecantPlot, ShowConfig, table::TableObserver};
use secant_solvers::equation::secant::{self, Config};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "dottie".into());
    match mode.as_str() {
        "dottie" => run("f(x) = cos(x) - x", |x| x.cos() - x, [0.0, 1.0]),
        "sqrt2" => run("f(x) = x^2 - 2", |x| x * x - 2.0, [1.0, 2.0]),
        "cubic" => run("f(x) = x^3", |x| x * x * x, [1.0, 0.9]),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [dottie|sqrt2|cubic]");
            std::process::exit(1);
        }
    }
}

fn run(label: &str, f: fn(f64) -> f64, estimates: [f64; 2]) -> Result<(), Box<dyn Error>> {
    let mut plot = SecantPlot::new(&f, label, estimates)?;
    let mut table = TableObserver::new(io::stdout().lock());

    let solution = secant::solve(
        &f,
        estimates,
        &Config::default(),
        |record: &secant::IterationRecord| {
            plot.record(record);
            Observer::<_, secant::Action>::observe(&mut table, record)
        },
    )?;
    table.finish()?;

    println!(
        "{:?} after {} iterations: x ≈ {}",
        solution.status, solution.iters, solution.x
    );

    plot.show(ShowConfig::new().title(label).legend())?;
    Ok(())
}
