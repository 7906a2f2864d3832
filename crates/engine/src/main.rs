use std::{
    error::Error,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use secant_core::Observer;
use secant_engine::{Engine, InputError, RunConfig, Summary};
use secant_expr::DEFAULT_VARIABLE;
use secant_observers::table::{DEFAULT_DECIMALS, TableObserver};
use secant_solvers::equation::secant::{Action, DEFAULT_MAX_ITERATIONS, IterationRecord, Status};

#[cfg(feature = "plot")]
use secant_observers::{SecantPlot, ShowConfig};

/// Find a root of f(x) with the secant method.
#[derive(Parser, Debug)]
#[command(name = "secant", version, about, long_about = None)]
struct Args {
    /// Expression in one variable, e.g. "x^2 - 2" or "cos(x) - x"
    #[arg(value_name = "EXPRESSION", allow_hyphen_values = true)]
    expression: String,

    /// First starting estimate
    #[arg(value_name = "X0", allow_negative_numbers = true)]
    x0: String,

    /// Second starting estimate
    #[arg(value_name = "X1", allow_negative_numbers = true)]
    x1: String,

    /// Relative error tolerance; falls back to 1e-6 if it does not parse
    #[arg(short, long)]
    tolerance: Option<String>,

    /// Maximum number of iterations
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Decimals printed in the table
    #[arg(short, long, default_value_t = DEFAULT_DECIMALS)]
    decimals: usize,

    /// Name of the variable in the expression
    #[arg(long, default_value = DEFAULT_VARIABLE)]
    variable: String,

    /// Open a plot window after the run
    #[arg(long)]
    plot: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(err.as_ref()));
            ExitCode::FAILURE
        }
    }
}

/// Runs one invocation, writing the table and summary to `out`.
fn run(args: &Args, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    #[cfg(not(feature = "plot"))]
    if args.plot {
        return Err("--plot requires the `plot` feature".into());
    }

    let config = run_config(args)?;
    let function = config.compile()?;

    #[cfg(feature = "plot")]
    let mut plot = if args.plot {
        Some(SecantPlot::new(&function, function.to_string(), config.estimates())?)
    } else {
        None
    };

    let mut table = TableObserver::new(&mut *out).with_decimals(args.decimals);
    let mut engine = Engine::new();

    let result = engine.run_function(&function, &config, |record: &IterationRecord| {
        #[cfg(feature = "plot")]
        if let Some(plot) = plot.as_mut() {
            plot.record(record);
        }
        Observer::<_, Action>::observe(&mut table, record)
    });
    table.finish()?;

    let summary = result?;
    writeln!(out, "{}", describe(&summary, args.decimals))?;

    #[cfg(feature = "plot")]
    if let Some(plot) = plot {
        plot.show(ShowConfig::new().title(function.to_string()).legend())?;
    }

    Ok(())
}

fn run_config(args: &Args) -> Result<RunConfig, InputError> {
    Ok(RunConfig::parse(
        &args.expression,
        &args.x0,
        &args.x1,
        args.tolerance.as_deref(),
    )?
    .with_max_iterations(args.max_iterations)
    .with_variable(args.variable.trim()))
}

fn describe(summary: &Summary, decimals: usize) -> String {
    let Summary { status, x, iters } = *summary;
    let outcome = match status {
        Status::Converged => "converged",
        Status::Stalled => "stalled",
        Status::Exhausted => "reached the iteration limit",
        Status::StoppedByObserver => "stopped early",
    };
    format!("{outcome} after {iters} iterations: x ≈ {x:.decimals$}")
}

fn error_line(err: &dyn Error) -> String {
    format!("error: {err}")
}
