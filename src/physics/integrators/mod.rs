//! Step-update kernels for Schwarzschild equatorial motion
//!
//! Each kernel advances (r, θ, pr) by one fixed step under the shared
//! effective-potential force law; they differ only in the order in which
//! updated and stale components feed the sub-updates, which is exactly what
//! gives them distinct stability and conservation trade-offs.

use crate::physics::body::BodyParameters;
use crate::physics::math::Scalar;
use crate::physics::simulation::SimulationState;

pub mod conservation;
pub mod euler;
pub mod midpoint;
pub mod registry;

pub use conservation::Conservation;
pub use euler::{Euler1, Euler2, Euler3, Euler4};
pub use midpoint::ModifiedMidpoint;
pub use registry::Solver;

/// Per-run constants every kernel needs
///
/// h is the conserved specific angular momentum of the configuration; the
/// kernels never re-derive it from the evolving state.
#[derive(Debug, Clone, Copy)]
pub struct StepContext {
    /// Standard gravitational parameter GM [m³/s²]
    pub gm: Scalar,
    /// Specific angular momentum r0²·ω0 [m²/s]
    pub h: Scalar,
}

impl StepContext {
    /// Build the context for a body configuration
    pub fn for_body(params: &BodyParameters) -> Self {
        Self {
            gm: crate::physics::math::G * params.mass(),
            h: params.specific_angular_momentum(),
        }
    }
}

/// One discretization scheme
///
/// `step` is a pure state update: it reads and writes only (r, θ, pr) and
/// keeps no mutable state of its own across steps. `init` runs once per run
/// and lets a kernel capture constants derived from the initial state (the
/// conservation scheme stores the orbit energy there).
pub trait Kernel: Send {
    /// Called once before the first step
    fn init(&mut self, _state: &SimulationState, _ctx: &StepContext) {}

    /// Advance the state by one step of size `dt`
    fn step(&self, state: &mut SimulationState, ctx: &StepContext, dt: Scalar);

    /// Scheme name for logs and reports
    fn name(&self) -> &'static str;

    /// Formal order of accuracy
    fn order(&self) -> usize;
}
