//! Perihelion prelude module
//!
//! This module re-exports the most commonly used types, traits, and functions
//! across the crate to reduce import boilerplate.

// Internal re-exports - Config
pub use crate::config::SimulationConfig;

// Internal re-exports - Errors
pub use crate::error::{SimResult, SimulationError};

// Internal re-exports - Physics
pub use crate::physics::body::BodyParameters;
pub use crate::physics::integrators::registry::Solver;
pub use crate::physics::math::Scalar;
pub use crate::physics::simulation::{
    RunSettings, SimulationState, TerminationReason, Trajectory, TrajectorySample, simulate,
    simulate_with_cancel,
};

// Internal re-exports - Analysis
pub use crate::physics::analysis::{
    Apsis, expected_precession_per_orbit, find_apoapsides, orbital_period, precession_per_orbit,
    precession_rate,
};
