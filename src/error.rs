//! Error types for the simulation core

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimulationError>;

/// Errors that can occur while configuring or running a simulation
///
/// All variants are fatal to the run that produced them; the core never
/// retries internally. Retrying with an adjusted step size is caller policy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Non-physical body parameters or run settings
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A solver name that does not resolve to a known scheme
    #[error("unknown solver '{0}' (available: {1})")]
    UnknownSolver(String, String),

    /// The integrator produced a non-finite state component
    #[error("numerical blow-up at t = {t} s (step {step}): state is no longer finite")]
    NumericalBlowup {
        /// Simulation time at which the state went non-finite
        t: f64,
        /// Step count at which the state went non-finite
        step: u64,
    },
}
