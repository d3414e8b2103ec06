//! Fixed-step integration driver
//!
//! Owns the mutable run state, applies a kernel once per step, samples the
//! trajectory on a stride, and terminates on the first satisfied policy. A
//! run yields either a complete trajectory plus the reason it stopped, or an
//! error; never a mix.

use crate::error::{SimResult, SimulationError};
use crate::physics::body::BodyParameters;
use crate::physics::integrators::{Solver, StepContext};
use crate::physics::math::Scalar;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Mutable per-run state advanced by the kernels
///
/// Kernels read and write `r`, `theta`, `pr`; the driver owns `t` and
/// `steps` and recomputes `t = steps·dt` so repeated runs stay bit-identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Orbital radius [m]
    pub r: Scalar,
    /// Accumulated angle [rad]
    pub theta: Scalar,
    /// Radial velocity [m/s]
    pub pr: Scalar,
    /// Simulation time [s]
    pub t: Scalar,
    /// Steps taken so far
    pub steps: u64,
}

impl SimulationState {
    /// Initial state for a body configuration
    pub fn initial(params: &BodyParameters) -> Self {
        Self {
            r: params.initial_radius(),
            theta: params.initial_angle(),
            pr: params.radial_velocity(),
            t: 0.0,
            steps: 0,
        }
    }

    fn is_finite(&self) -> bool {
        self.r.is_finite() && self.theta.is_finite() && self.pr.is_finite()
    }
}

/// One sampled trajectory record, SI units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    /// Orbital radius [m]
    pub r: Scalar,
    /// Accumulated angle [rad]
    pub theta: Scalar,
    /// Simulation time [s]
    pub t: Scalar,
    /// Radial velocity [m/s]
    pub pr: Scalar,
}

impl From<SimulationState> for TrajectorySample {
    fn from(s: SimulationState) -> Self {
        Self {
            r: s.r,
            theta: s.theta,
            t: s.t,
            pr: s.pr,
        }
    }
}

/// Ordered, immutable sequence of sampled states
///
/// Always contains the initial and final state of the run. For S total steps
/// sampled every k-th step the length is ceil(S/k) + 1.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    /// Number of sampled records
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when no record has been sampled yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First sampled state (the initial condition)
    pub fn first(&self) -> Option<&TrajectorySample> {
        self.samples.first()
    }

    /// Final state of the run
    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    /// All samples in step order
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// Iterate over samples in step order
    pub fn iter(&self) -> std::slice::Iter<'_, TrajectorySample> {
        self.samples.iter()
    }
}

/// Why a run stopped
///
/// Every variant is a normal outcome; errors travel separately as
/// [`SimulationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Simulation time reached `t_max`
    TimeReached,
    /// Step budget `max_steps` exhausted
    BudgetExceeded,
    /// Accumulated angle advanced past `max_theta`
    ThetaReached,
    /// The cancellation flag was raised
    Cancelled,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TerminationReason::TimeReached => "time limit reached",
            TerminationReason::BudgetExceeded => "step budget exceeded",
            TerminationReason::ThetaReached => "angular limit reached",
            TerminationReason::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Driver settings shared by the config file, the CLI, and direct callers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    /// Step size [s]
    pub dt: Scalar,
    /// Stop once t ≥ t_max [s]
    pub t_max: Scalar,
    /// Stop once this many steps have been taken
    pub max_steps: u64,
    /// Optional stop once θ − θ0 ≥ max_theta [rad]
    pub max_theta: Option<Scalar>,
    /// Append a sample every this many steps
    pub history_interval: u64,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            dt: 10.0,
            t_max: 1.0e8,
            max_steps: 100_000_000,
            max_theta: None,
            history_interval: 1_000,
        }
    }
}

impl RunSettings {
    /// Reject settings the driver cannot run with
    pub fn validate(&self) -> SimResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "dt must be positive and finite, got {}",
                self.dt
            )));
        }
        if !self.t_max.is_finite() || self.t_max <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "t_max must be positive and finite, got {}",
                self.t_max
            )));
        }
        if self.max_steps == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "max_steps must be at least 1".into(),
            ));
        }
        if self.history_interval == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "history_interval must be at least 1".into(),
            ));
        }
        if let Some(max_theta) = self.max_theta
            && (!max_theta.is_finite() || max_theta <= 0.0)
        {
            return Err(SimulationError::InvalidConfiguration(format!(
                "max_theta must be positive and finite, got {max_theta}"
            )));
        }
        Ok(())
    }
}

/// Run one simulation to completion
///
/// Advances the state with the selected solver until the first termination
/// policy fires, sampling every `history_interval` steps. The final state is
/// always appended even when it falls off the sampling stride.
///
/// # Errors
///
/// [`SimulationError::InvalidConfiguration`] for bad settings and
/// [`SimulationError::NumericalBlowup`] if any state component goes
/// non-finite mid-run; no partial trajectory accompanies an error.
pub fn simulate(
    solver: Solver,
    params: &BodyParameters,
    settings: &RunSettings,
) -> SimResult<(Trajectory, TerminationReason)> {
    let never = AtomicBool::new(false);
    simulate_with_cancel(solver, params, settings, &never)
}

/// [`simulate`] with a cooperative cancellation flag
///
/// The flag is polled once per step; raising it from another thread stops
/// the run at the next step boundary with [`TerminationReason::Cancelled`]
/// and a trajectory that is complete up to that point.
pub fn simulate_with_cancel(
    solver: Solver,
    params: &BodyParameters,
    settings: &RunSettings,
    cancel: &AtomicBool,
) -> SimResult<(Trajectory, TerminationReason)> {
    settings.validate()?;

    let ctx = StepContext::for_body(params);
    let mut kernel = solver.create();
    let mut state = SimulationState::initial(params);
    kernel.init(&state, &ctx);

    let theta0 = state.theta;
    let dt = settings.dt;
    let interval = settings.history_interval;

    debug!(
        "run start: solver={} (order {}) dt={dt} t_max={} max_steps={} interval={interval}",
        kernel.name(),
        kernel.order(),
        settings.t_max,
        settings.max_steps
    );

    let estimated = (settings.t_max / dt).min(settings.max_steps as Scalar) as usize / interval as usize;
    let mut samples = Vec::with_capacity(estimated.saturating_add(2).min(1 << 20));
    samples.push(TrajectorySample::from(state));
    let mut last_sampled: u64 = 0;

    let reason = loop {
        if cancel.load(Ordering::Relaxed) {
            break TerminationReason::Cancelled;
        }

        kernel.step(&mut state, &ctx, dt);
        state.steps += 1;
        state.t = state.steps as Scalar * dt;

        if !state.is_finite() {
            return Err(SimulationError::NumericalBlowup {
                t: state.t,
                step: state.steps,
            });
        }

        if state.steps % interval == 0 {
            samples.push(TrajectorySample::from(state));
            last_sampled = state.steps;
        }

        if state.t >= settings.t_max {
            break TerminationReason::TimeReached;
        }
        if state.steps >= settings.max_steps {
            break TerminationReason::BudgetExceeded;
        }
        if let Some(max_theta) = settings.max_theta
            && state.theta - theta0 >= max_theta
        {
            break TerminationReason::ThetaReached;
        }
    };

    if last_sampled != state.steps {
        samples.push(TrajectorySample::from(state));
    }

    debug!(
        "run end: {reason} after {} steps, {} samples",
        state.steps,
        samples.len()
    );

    Ok((Trajectory { samples }, reason))
}
