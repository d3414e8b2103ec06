use clap::Parser;
use log::info;
use perihelion::cli::{self, Args};
use perihelion::physics::analysis;
use perihelion::physics::simulation::{Trajectory, simulate};
use std::io::Write;

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(if args.verbose {
        "debug"
    } else {
        "info"
    }))
    .init();

    if args.list_solvers {
        cli::handle_list_solvers();
        return;
    }

    if args.list_presets {
        cli::handle_list_presets();
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli::load_and_apply_config(args)?;

    info!(
        "integrating: solver={} dt={} s, t_max={} s",
        config.solver, config.run.dt, config.run.t_max
    );

    let (trajectory, reason) = simulate(config.solver, &config.body, &config.run)?;

    println!("Run finished: {reason}");
    if let Some(last) = trajectory.last() {
        println!(
            "  {} steps, {} samples, final r = {:.6e} m, θ = {:.6} rad",
            step_count(last.t, config.run.dt),
            trajectory.len(),
            last.r,
            last.theta
        );
    }

    report_precession(&trajectory, &config);

    if let Some(path) = &args.output {
        write_csv(path, &trajectory)?;
        println!("Trajectory written to {path}");
    }

    Ok(())
}

/// Steps taken, recovered from the final timestamp (t is always steps·dt)
fn step_count(t: f64, dt: f64) -> u64 {
    (t / dt).round() as u64
}

fn report_precession(trajectory: &Trajectory, config: &perihelion::config::SimulationConfig) {
    let expected = analysis::expected_precession_per_orbit(&config.body);
    let apsides = analysis::find_apoapsides(trajectory);
    match analysis::precession_per_orbit(&apsides) {
        Some(measured) => {
            println!("  precession per orbit: {measured:.6e} rad (analytic {expected:.6e} rad)");
            if let Some(period) = analysis::orbital_period(&apsides) {
                println!("  orbital period: {period:.6e} s");
            }
        }
        None => {
            println!("  fewer than two apoapsides sampled; no precession estimate");
            println!("  analytic prediction: {expected:.6e} rad per orbit");
        }
    }
}

fn write_csv(path: &str, trajectory: &Trajectory) -> std::io::Result<()> {
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    writeln!(out, "t,r,theta,pr")?;
    for sample in trajectory.iter() {
        writeln!(
            out,
            "{},{},{},{}",
            sample.t, sample.r, sample.theta, sample.pr
        )?;
    }
    out.flush()
}
