//! Named orbital configurations
//!
//! Read-only table of known-interesting regimes. Each function builds a fresh
//! value; derived regimes go through the copy-with-override methods on
//! [`BodyParameters`] rather than mutating a shared instance.

use crate::physics::body::BodyParameters;
use crate::physics::math::{self, M_SUN};

/// Mercury-like orbit: the classic 43″-per-century precession benchmark
///
/// Perihelion distance and speed of Mercury around one solar mass.
pub fn mercury() -> BodyParameters {
    BodyParameters::new(M_SUN, 6.9818e10, 0.0, 0.0, 3.886e4 / 6.9818e10)
        .expect("preset lies outside the Schwarzschild radius")
}

/// Moderate-field orbit at 200 Schwarzschild radii with visible precession
pub fn small_precession() -> BodyParameters {
    let r = math::schwarzschild_radius(M_SUN) * 200.0;
    BodyParameters::new(M_SUN, r, 0.0, 0.0, 35.0)
        .expect("preset lies outside the Schwarzschild radius")
}

/// Near-critical orbit at 20 Schwarzschild radii
///
/// The angular rate is scaled a few percent below the circular rate so the
/// particle alternates radial zooms with fast whirls near periapsis.
pub fn zoom_whirl() -> BodyParameters {
    let r = math::schwarzschild_radius(M_SUN) * 20.0;
    let circular = BodyParameters::new(M_SUN, r, 0.0, 0.0, math::circular_omega(M_SUN, r))
        .expect("preset lies outside the Schwarzschild radius");
    circular.with_scaled_angular_velocity(0.92)
}

/// Earth-like circular orbit at 1 AU; precession is negligible
pub fn earth() -> BodyParameters {
    BodyParameters::new(
        M_SUN,
        math::AU,
        0.0,
        0.0,
        math::circular_omega(M_SUN, math::AU),
    )
    .expect("preset lies outside the Schwarzschild radius")
}

/// Resolve a preset by name
pub fn by_name(name: &str) -> Option<BodyParameters> {
    match name {
        "mercury" => Some(mercury()),
        "small_precession" => Some(small_precession()),
        "zoom_whirl" => Some(zoom_whirl()),
        "earth" => Some(earth()),
        _ => None,
    }
}

/// Names accepted by [`by_name`]
pub fn names() -> &'static [&'static str] {
    &["mercury", "small_precession", "zoom_whirl", "earth"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_presets_are_valid() {
        for name in names() {
            let p = by_name(name).unwrap();
            assert!(p.initial_radius() > p.schwarzschild_radius(), "{name}");
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(by_name("betelgeuse").is_none());
    }

    #[test]
    fn zoom_whirl_sits_below_circular_rate() {
        let p = zoom_whirl();
        let circular = math::circular_omega(p.mass(), p.initial_radius());
        assert!(p.angular_velocity() < circular);
        assert!(p.angular_velocity() > 0.8 * circular);
    }
}
