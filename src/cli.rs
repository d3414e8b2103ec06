//! Command line interface for Perihelion

use clap::Parser;

use crate::config::SimulationConfig;
use crate::error::{SimResult, SimulationError};
use crate::physics::integrators::registry::Solver;
use crate::physics::presets;

/// Perihelion - Schwarzschild orbit integrator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Built-in orbit preset (e.g., mercury, zoom_whirl)
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Solver (e.g., euler1, modified_midpoint, conservation)
    #[arg(short, long, value_name = "NAME")]
    pub solver: Option<String>,

    /// Time step in seconds (overrides config file)
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub dt: Option<f64>,

    /// Simulated time limit in seconds (overrides config file)
    #[arg(long, value_name = "SECONDS")]
    pub t_max: Option<f64>,

    /// Stop once the accumulated angle reaches this many radians
    #[arg(long, value_name = "RADIANS")]
    pub max_theta: Option<f64>,

    /// Record every Nth step (overrides config file)
    #[arg(long, value_name = "STEPS")]
    pub history_interval: Option<u64>,

    /// Write the sampled trajectory to a CSV file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// List available solvers and exit
    #[arg(long)]
    pub list_solvers: bool,

    /// List built-in presets and exit
    #[arg(long)]
    pub list_presets: bool,
}

/// Handles the --list-solvers flag by printing available solvers and exiting
pub fn handle_list_solvers() {
    println!("Available solvers:");
    for solver in Solver::ALL {
        println!("  - {solver}");
    }
}

/// Handles the --list-presets flag by printing built-in presets and exiting
pub fn handle_list_presets() {
    println!("Built-in presets:");
    for name in presets::names() {
        println!("  - {name}");
    }
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> SimResult<SimulationConfig> {
    let mut config = if let Some(config_path) = &args.config {
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load_or_default(config_path)
    } else {
        SimulationConfig::default()
    };

    if let Some(preset) = &args.preset {
        println!("Using preset: {preset}");
        config.body = presets::by_name(preset).ok_or_else(|| {
            SimulationError::InvalidConfiguration(format!(
                "unknown preset '{preset}' (available: {})",
                presets::names().join(", ")
            ))
        })?;
    }

    if let Some(solver) = &args.solver {
        config.solver = solver.parse()?;
        println!("Using solver: {}", config.solver);
    }

    if let Some(dt) = args.dt {
        println!("Overriding time step to: {dt} s");
        config.run.dt = dt;
    }

    if let Some(t_max) = args.t_max {
        println!("Overriding time limit to: {t_max} s");
        config.run.t_max = t_max;
    }

    if let Some(max_theta) = args.max_theta {
        println!("Stopping at accumulated angle: {max_theta} rad");
        config.run.max_theta = Some(max_theta);
    }

    if let Some(interval) = args.history_interval {
        println!("Recording every {interval} steps");
        config.run.history_interval = interval;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("perihelion").chain(argv.iter().copied()))
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let config =
            load_and_apply_config(&args(&["--solver", "euler2", "--dt", "50", "--t-max", "1e6"]))
                .unwrap();
        assert_eq!(config.solver, Solver::Euler2);
        assert_eq!(config.run.dt, 50.0);
        assert_eq!(config.run.t_max, 1e6);
    }

    #[test]
    fn unknown_solver_is_reported() {
        let err = load_and_apply_config(&args(&["--solver", "rk4"])).unwrap_err();
        assert!(matches!(err, SimulationError::UnknownSolver(..)));
    }

    #[test]
    fn unknown_preset_is_reported() {
        let err = load_and_apply_config(&args(&["--preset", "pluto"])).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfiguration(_)));
    }

    #[test]
    fn invalid_override_fails_validation() {
        // A negative dt must parse as a value and be rejected by the run
        // settings, not by the argument parser.
        let err = load_and_apply_config(&args(&["--dt=-1"])).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfiguration(_)));

        let err = load_and_apply_config(&args(&["--dt", "-1"])).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidConfiguration(_)));
    }
}
