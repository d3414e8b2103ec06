//! First-order Euler kernels
//!
//! Four splittings of the same force law. They share every evaluation; the
//! only difference is which sub-updates see already-updated components within
//! a step. Euler1 is the fully explicit textbook scheme; Euler2 and Euler3
//! are the two semi-implicit orderings (kick-then-drift and drift-then-kick);
//! Euler4 adds the half-acceleration Taylor term to the radial drift while
//! advancing the angle from the stale radius.
//!
//! The orderings are load-bearing: the kick-first variants bound the energy
//! drift that makes Euler1 spiral, at identical cost. Each ordering is pinned
//! by a golden single-step test below; changing one is a behavior change, not
//! a refactor.

use super::{Kernel, StepContext};
use crate::physics::math::{Scalar, radial_acceleration};
use crate::physics::simulation::SimulationState;

/// Fully explicit Euler: every sub-update reads the stale state
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler1;

impl Kernel for Euler1 {
    fn step(&self, state: &mut SimulationState, ctx: &StepContext, dt: Scalar) {
        let a = radial_acceleration(ctx.gm, ctx.h, state.r);
        let r = state.r;
        state.r += state.pr * dt;
        state.theta += ctx.h / (r * r) * dt;
        state.pr += a * dt;
    }

    fn name(&self) -> &'static str {
        "euler1"
    }

    fn order(&self) -> usize {
        1
    }
}

/// Kick-then-drift semi-implicit Euler
///
/// The radial velocity is updated first and the new value drives the radial
/// drift; the angle advances from the new radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler2;

impl Kernel for Euler2 {
    fn step(&self, state: &mut SimulationState, ctx: &StepContext, dt: Scalar) {
        state.pr += radial_acceleration(ctx.gm, ctx.h, state.r) * dt;
        state.r += state.pr * dt;
        state.theta += ctx.h / (state.r * state.r) * dt;
    }

    fn name(&self) -> &'static str {
        "euler2"
    }

    fn order(&self) -> usize {
        1
    }
}

/// Drift-then-kick semi-implicit Euler
///
/// The adjoint ordering of [`Euler2`]: the radius drifts on the stale
/// velocity, then the kick is evaluated at the new radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler3;

impl Kernel for Euler3 {
    fn step(&self, state: &mut SimulationState, ctx: &StepContext, dt: Scalar) {
        state.r += state.pr * dt;
        state.pr += radial_acceleration(ctx.gm, ctx.h, state.r) * dt;
        state.theta += ctx.h / (state.r * state.r) * dt;
    }

    fn name(&self) -> &'static str {
        "euler3"
    }

    fn order(&self) -> usize {
        1
    }
}

/// Taylor-drift Euler
///
/// Radial drift carries the ½·a·dt² term; the angular advance still reads the
/// stale radius, which distinguishes this from [`ModifiedMidpoint`]
/// despite the identical radius update.
///
/// [`ModifiedMidpoint`]: super::ModifiedMidpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler4;

impl Kernel for Euler4 {
    fn step(&self, state: &mut SimulationState, ctx: &StepContext, dt: Scalar) {
        let a = radial_acceleration(ctx.gm, ctx.h, state.r);
        let r = state.r;
        state.r += state.pr * dt + 0.5 * a * dt * dt;
        state.theta += ctx.h / (r * r) * dt;
        state.pr += a * dt;
    }

    fn name(&self) -> &'static str {
        "euler4"
    }

    fn order(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::integrators::test_support::{assert_close, mercury_fixture};

    // Golden single-step pins. Expected values were computed once from the
    // pinned update formulas at dt = 100 s and a mid-orbit state
    // (r = 6.9818e10, θ = 0.3, pr = 1.5e4); they freeze each intra-step
    // ordering against accidental reshuffling.

    #[test]
    fn euler1_single_step_pinned() {
        let (ctx, mut s) = mercury_fixture();
        Euler1.step(&mut s, &ctx, 100.0);
        assert_close(s.r, 69_819_500_000.0, "r");
        assert_close(s.theta, 0.300_055_658_999_111_96, "theta");
        assert_close(s.pr, 14_999.439_666_937_182, "pr");
    }

    #[test]
    fn euler2_single_step_pinned() {
        let (ctx, mut s) = mercury_fixture();
        Euler2.step(&mut s, &ctx, 100.0);
        assert_close(s.r, 69_819_499_943.966_69, "r");
        assert_close(s.theta, 0.300_055_656_607_674_5, "theta");
        assert_close(s.pr, 14_999.439_666_937_182, "pr");
    }

    #[test]
    fn euler3_single_step_pinned() {
        let (ctx, mut s) = mercury_fixture();
        Euler3.step(&mut s, &ctx, 100.0);
        assert_close(s.r, 69_819_500_000.0, "r");
        assert_close(s.theta, 0.300_055_656_607_585_2, "theta");
        assert_close(s.pr, 14_999.439_644_547_418, "pr");
    }

    #[test]
    fn euler4_single_step_pinned() {
        let (ctx, mut s) = mercury_fixture();
        Euler4.step(&mut s, &ctx, 100.0);
        assert_close(s.r, 69_819_499_971.983_35, "r");
        assert_close(s.theta, 0.300_055_658_999_111_96, "theta");
        assert_close(s.pr, 14_999.439_666_937_182, "pr");
    }

    #[test]
    fn orderings_are_distinct() {
        // The four kernels must not collapse into one another: at least one
        // state component differs pairwise after a single large step.
        let (ctx, s0) = mercury_fixture();
        let kernels: [&dyn Kernel; 4] = [&Euler1, &Euler2, &Euler3, &Euler4];
        let mut results = Vec::new();
        for k in kernels {
            let mut s = s0;
            k.step(&mut s, &ctx, 500.0);
            results.push((s.r, s.theta, s.pr));
        }
        for i in 0..results.len() {
            for j in i + 1..results.len() {
                assert_ne!(results[i], results[j], "kernels {i} and {j} coincide");
            }
        }
    }
}
