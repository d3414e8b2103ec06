//! Post-run trajectory analysis
//!
//! Locates apoapsides by sign change of consecutive radius differences and
//! derives precession and period statistics from them. The apsis angle is
//! refined with a parabola through the bracketing samples; without that the
//! sampling stride swamps the Mercury-scale precession signal.

use crate::physics::body::BodyParameters;
use crate::physics::math::{C, G, Scalar};
use crate::physics::simulation::Trajectory;
use std::f64::consts::TAU;

/// One detected apoapsis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apsis {
    /// Accumulated angle at the apsis [rad]
    pub theta: Scalar,
    /// Sample time of the bracketing maximum [s]
    pub t: Scalar,
    /// Radius at the bracketing maximum [m]
    pub r: Scalar,
}

/// Locate all apoapsides in a trajectory
///
/// A sample is a radial maximum when the radius rose into it and does not
/// rise out of it. The apsis angle is then taken from the vertex of the
/// parabola through the three bracketing (θ, r) samples, which is what makes
/// sub-stride precession measurable.
pub fn find_apoapsides(trajectory: &Trajectory) -> Vec<Apsis> {
    let samples = trajectory.samples();
    let mut apsides = Vec::new();

    for i in 1..samples.len().saturating_sub(1) {
        let (prev, here, next) = (&samples[i - 1], &samples[i], &samples[i + 1]);
        if here.r - prev.r > 0.0 && next.r - here.r <= 0.0 {
            apsides.push(Apsis {
                theta: parabolic_vertex(
                    (prev.theta, prev.r),
                    (here.theta, here.r),
                    (next.theta, next.r),
                ),
                t: here.t,
                r: here.r,
            });
        }
    }

    apsides
}

/// Vertex abscissa of the parabola through three points; falls back to the
/// center point when the points are collinear.
fn parabolic_vertex(p0: (Scalar, Scalar), p1: (Scalar, Scalar), p2: (Scalar, Scalar)) -> Scalar {
    let d1 = (p1.1 - p0.1) / (p1.0 - p0.0);
    let d2 = (p2.1 - p1.1) / (p2.0 - p1.0);
    let dd = (d2 - d1) / (p2.0 - p0.0);
    if dd == 0.0 || !dd.is_finite() {
        return p1.0;
    }
    0.5 * (p0.0 + p1.0) - d1 / (2.0 * dd)
}

/// Mean periapsis advance per orbit [rad]
///
/// Consecutive apoapsides are one revolution (2π) apart plus the precession;
/// the estimate averages first-to-last so stride noise cancels across orbits.
/// Takes the output of [`find_apoapsides`] so the (long) trajectory is
/// scanned once however many statistics a caller derives. Needs at least two
/// apoapsides.
pub fn precession_per_orbit(apsides: &[Apsis]) -> Option<Scalar> {
    if apsides.len() < 2 {
        return None;
    }
    let first = apsides.first()?.theta;
    let last = apsides.last()?.theta - TAU * (apsides.len() - 1) as Scalar;
    Some((last - first) / (apsides.len() - 1) as Scalar)
}

/// Mean periapsis advance per unit time [rad/s]
pub fn precession_rate(apsides: &[Apsis]) -> Option<Scalar> {
    if apsides.len() < 2 {
        return None;
    }
    let dtheta =
        apsides.last()?.theta - TAU * (apsides.len() - 1) as Scalar - apsides.first()?.theta;
    let dt = apsides.last()?.t - apsides.first()?.t;
    if dt <= 0.0 {
        return None;
    }
    Some(dtheta / dt)
}

/// Mean time between consecutive apoapsides [s]
pub fn orbital_period(apsides: &[Apsis]) -> Option<Scalar> {
    if apsides.len() < 2 {
        return None;
    }
    let dt = apsides.last()?.t - apsides.first()?.t;
    Some(dt / (apsides.len() - 1) as Scalar)
}

/// Analytic first-order precession estimate: 6π·G²M²/(h²c²) [rad/orbit]
pub fn expected_precession_per_orbit(params: &BodyParameters) -> Scalar {
    let gm = G * params.mass();
    let h = params.specific_angular_momentum();
    6.0 * std::f64::consts::PI * gm * gm / (h * h * C * C)
}
