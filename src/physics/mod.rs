pub mod analysis;
pub mod body;
pub mod integrators;
pub mod math;
pub mod presets;
pub mod simulation;
