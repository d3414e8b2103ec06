//! Physical configuration of a simulated orbit
//!
//! `BodyParameters` is an immutable value: construction validates it, derived
//! regimes are produced by copying with an override, and nothing mutates an
//! instance in place.

use crate::error::{SimResult, SimulationError};
use crate::physics::math::{self, Scalar};
use serde::{Deserialize, Serialize};

/// Central mass and initial conditions of the test particle, in SI base units
///
/// Invariants held from construction onward: the mass is positive and the
/// initial radius lies outside the Schwarzschild radius of that mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBodyParameters", into = "RawBodyParameters")]
pub struct BodyParameters {
    mass: Scalar,
    initial_radius: Scalar,
    radial_velocity: Scalar,
    initial_angle: Scalar,
    angular_velocity: Scalar,
}

/// Unvalidated mirror used for serde round-trips; `TryFrom` re-runs the
/// constructor so a hand-edited config file cannot smuggle in a non-physical
/// body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawBodyParameters {
    mass: Scalar,
    initial_radius: Scalar,
    radial_velocity: Scalar,
    initial_angle: Scalar,
    angular_velocity: Scalar,
}

impl TryFrom<RawBodyParameters> for BodyParameters {
    type Error = SimulationError;

    fn try_from(raw: RawBodyParameters) -> Result<Self, Self::Error> {
        BodyParameters::new(
            raw.mass,
            raw.initial_radius,
            raw.radial_velocity,
            raw.initial_angle,
            raw.angular_velocity,
        )
    }
}

impl From<BodyParameters> for RawBodyParameters {
    fn from(p: BodyParameters) -> Self {
        Self {
            mass: p.mass,
            initial_radius: p.initial_radius,
            radial_velocity: p.radial_velocity,
            initial_angle: p.initial_angle,
            angular_velocity: p.angular_velocity,
        }
    }
}

impl BodyParameters {
    /// Create a validated parameter set
    ///
    /// Fails with [`SimulationError::InvalidConfiguration`] if the mass is
    /// not positive, the initial radius does not exceed the Schwarzschild
    /// radius of that mass, or any field is non-finite.
    pub fn new(
        mass_kg: Scalar,
        radius_m: Scalar,
        radial_velocity_m_s: Scalar,
        theta0_rad: Scalar,
        angular_velocity_rad_s: Scalar,
    ) -> SimResult<Self> {
        let fields = [
            mass_kg,
            radius_m,
            radial_velocity_m_s,
            theta0_rad,
            angular_velocity_rad_s,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(SimulationError::InvalidConfiguration(
                "body parameters must be finite".into(),
            ));
        }
        if mass_kg <= 0.0 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "mass must be positive, got {mass_kg} kg"
            )));
        }
        let rs = math::schwarzschild_radius(mass_kg);
        if radius_m <= rs {
            return Err(SimulationError::InvalidConfiguration(format!(
                "initial radius {radius_m} m must exceed the Schwarzschild radius {rs} m"
            )));
        }
        Ok(Self {
            mass: mass_kg,
            initial_radius: radius_m,
            radial_velocity: radial_velocity_m_s,
            initial_angle: theta0_rad,
            angular_velocity: angular_velocity_rad_s,
        })
    }

    /// Central mass [kg]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    /// Initial orbital radius [m]
    pub fn initial_radius(&self) -> Scalar {
        self.initial_radius
    }

    /// Initial radial velocity [m/s]
    pub fn radial_velocity(&self) -> Scalar {
        self.radial_velocity
    }

    /// Initial angle [rad]
    pub fn initial_angle(&self) -> Scalar {
        self.initial_angle
    }

    /// Initial angular velocity [rad/s]
    pub fn angular_velocity(&self) -> Scalar {
        self.angular_velocity
    }

    /// Schwarzschild radius of the central mass [m]
    pub fn schwarzschild_radius(&self) -> Scalar {
        math::schwarzschild_radius(self.mass)
    }

    /// Specific angular momentum h = r0²·ω0 [m²/s]
    ///
    /// Conserved along an ideal trajectory; used by every kernel for the
    /// angular advance and by the analytic precession estimate.
    pub fn specific_angular_momentum(&self) -> Scalar {
        self.initial_radius * self.initial_radius * self.angular_velocity
    }

    /// Copy with a different angular velocity
    pub fn with_angular_velocity(self, angular_velocity: Scalar) -> Self {
        Self {
            angular_velocity,
            ..self
        }
    }

    /// Copy with the angular velocity scaled by a factor
    ///
    /// The usual way to derive near-critical regimes (zoom-whirl orbits sit a
    /// few percent below the circular rate).
    pub fn with_scaled_angular_velocity(self, factor: Scalar) -> Self {
        self.with_angular_velocity(self.angular_velocity * factor)
    }

    /// Copy with a different initial radial velocity
    pub fn with_radial_velocity(self, radial_velocity: Scalar) -> Self {
        Self {
            radial_velocity,
            ..self
        }
    }

    /// Copy with a different initial angle
    pub fn with_initial_angle(self, initial_angle: Scalar) -> Self {
        Self {
            initial_angle,
            ..self
        }
    }

    /// Copy with a different central mass, revalidating against the new
    /// Schwarzschild radius
    pub fn with_mass(self, mass: Scalar) -> SimResult<Self> {
        Self::new(
            mass,
            self.initial_radius,
            self.radial_velocity,
            self.initial_angle,
            self.angular_velocity,
        )
    }

    /// Copy with a different initial radius, revalidated
    pub fn with_initial_radius(self, initial_radius: Scalar) -> SimResult<Self> {
        Self::new(
            self.mass,
            initial_radius,
            self.radial_velocity,
            self.initial_angle,
            self.angular_velocity,
        )
    }
}
