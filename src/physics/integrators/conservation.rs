//! Energy-constraint kernel

use super::{Kernel, StepContext};
use crate::physics::math::{Scalar, effective_potential, radial_acceleration};
use crate::physics::simulation::SimulationState;

/// Constraint-based scheme: pr is re-derived, not integrated
///
/// `init` captures the orbit energy E = ½pr² + V_eff(r). Each step drifts the
/// radius with a provisionally kicked radial velocity, advances the angle
/// from the new radius, then solves the energy constraint for the new pr:
///
/// ```text
/// pr' = sign(pr + f(r)·dt) · sqrt(max(2(E − V_eff(r')), 0))
/// ```
///
/// The motion constant is exact by construction, which makes this the
/// reference for quantifying drift in the integrating kernels. Near a turning
/// point the drift can overshoot into the classically forbidden region; the
/// square root clamps to zero there and the next provisional kick
/// re-establishes the travel direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Conservation {
    energy: Scalar,
}

impl Kernel for Conservation {
    fn init(&mut self, state: &SimulationState, ctx: &StepContext) {
        self.energy =
            0.5 * state.pr * state.pr + effective_potential(ctx.gm, ctx.h, state.r);
    }

    fn step(&self, state: &mut SimulationState, ctx: &StepContext, dt: Scalar) {
        let pr_provisional = state.pr + radial_acceleration(ctx.gm, ctx.h, state.r) * dt;
        state.r += pr_provisional * dt;
        state.theta += ctx.h / (state.r * state.r) * dt;

        let kinetic = 2.0 * (self.energy - effective_potential(ctx.gm, ctx.h, state.r));
        state.pr = kinetic.max(0.0).sqrt().copysign(pr_provisional);
    }

    fn name(&self) -> &'static str {
        "conservation"
    }

    fn order(&self) -> usize {
        1
    }
}
