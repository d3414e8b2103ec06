//! Perihelion: planar geodesic integration in the Schwarzschild metric.
//!
//! The crate integrates equatorial orbits of a test particle around a
//! non-rotating mass, with a family of fixed-step solvers whose whole point
//! is to be compared against each other on the relativistic perihelion
//! precession they produce. See [`physics::simulation::simulate`] for the
//! entry point and [`physics::analysis`] for the precession measurements.

pub mod cli;
pub mod config;
pub mod error;
pub mod physics;
pub mod prelude;
