use crate::error::SimResult;
use crate::physics::body::BodyParameters;
use crate::physics::integrators::registry::Solver;
use crate::physics::presets;
use crate::physics::simulation::RunSettings;
use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SimulationConfig {
    #[serde(default = "presets::mercury")]
    pub body: BodyParameters,
    #[serde(default)]
    pub run: RunSettings,
    #[serde(default)]
    pub solver: Solver,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            body: presets::mercury(),
            run: RunSettings::default(),
            solver: Solver::default(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path);
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the run settings before handing them to the driver
    pub fn validate(&self) -> SimResult<()> {
        self.run.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = SimulationConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: SimulationConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.solver, config.solver);
        assert_eq!(back.run, config.run);
        assert_eq!(back.body, config.body);
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config: SimulationConfig = toml::from_str("[run]\ndt = 25.0\n").unwrap();
        assert_eq!(config.run.dt, 25.0);
        assert_eq!(config.solver, Solver::default());
        assert_eq!(config.body, presets::mercury());
    }

    #[test]
    fn invalid_body_section_is_rejected() {
        let text = r#"
            [body]
            mass = -1.0
            initial_radius = 1.0e10
            radial_velocity = 0.0
            initial_angle = 0.0
            angular_velocity = 1.0e-6
        "#;
        assert!(toml::from_str::<SimulationConfig>(text).is_err());
    }

    #[test]
    fn load_or_default_handles_missing_file() {
        let config = SimulationConfig::load_or_default("/nonexistent/perihelion.toml");
        assert_eq!(config.solver, Solver::default());
    }
}
