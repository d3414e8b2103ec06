//! Scalar math for Schwarzschild equatorial motion
//!
//! Everything operates on SI base units: kilograms, meters, seconds, radians.
//! The effective potential combines the Newtonian terms with the relativistic
//! r⁻³ correction that produces perihelion precession.

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// Gravitational constant [m³ kg⁻¹ s⁻²]
pub const G: Scalar = 6.674e-11;

/// Speed of light [m s⁻¹]
pub const C: Scalar = 299_792_458.0;

/// Mass of the Sun [kg]
pub const M_SUN: Scalar = 1.989e30;

/// Astronomical unit [m]
pub const AU: Scalar = 1.495_978_707e11;

/// Schwarzschild radius of a non-rotating mass: r_s = 2GM/c²
pub fn schwarzschild_radius(mass: Scalar) -> Scalar {
    2.0 * mass * G / (C * C)
}

/// Angular velocity of a circular Newtonian orbit of the given radius
pub fn circular_omega(mass: Scalar, radius: Scalar) -> Scalar {
    (G * mass / radius).sqrt() / radius
}

/// Effective radial potential per unit mass
///
/// V_eff(r) = −GM/r + h²/(2r²) − GM·h²/(c²r³)
///
/// The last term is the relativistic correction; without it this is the
/// classical two-body effective potential and orbits close exactly.
pub fn effective_potential(gm: Scalar, h: Scalar, r: Scalar) -> Scalar {
    -gm / r + h * h / (2.0 * r * r) - gm * h * h / (C * C * r * r * r)
}

/// Radial acceleration −dV_eff/dr
///
/// f(r) = −GM/r² + h²/r³ − 3GM·h²/(c²r⁴)
pub fn radial_acceleration(gm: Scalar, h: Scalar, r: Scalar) -> Scalar {
    -gm / (r * r) + h * h / (r * r * r) - 3.0 * gm * h * h / (C * C * r * r * r * r)
}
