//! Solver selection
//!
//! A closed enumeration mapped to kernels through an explicit match. Name
//! resolution (with a handful of aliases) only exists at the CLI/config
//! boundary; nothing in the numeric core ever interprets a string.

use super::{Conservation, Euler1, Euler2, Euler3, Euler4, Kernel, ModifiedMidpoint};
use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed family of discretization schemes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Solver {
    /// Fully explicit first-order Euler
    Euler1,
    /// Kick-then-drift semi-implicit Euler
    Euler2,
    /// Drift-then-kick semi-implicit Euler
    Euler3,
    /// Taylor-drift Euler
    Euler4,
    /// Second-order modified midpoint
    #[default]
    ModifiedMidpoint,
    /// Energy-constraint reference scheme
    Conservation,
}

impl Solver {
    /// All solvers, in a stable order
    pub const ALL: [Solver; 6] = [
        Solver::Euler1,
        Solver::Euler2,
        Solver::Euler3,
        Solver::Euler4,
        Solver::ModifiedMidpoint,
        Solver::Conservation,
    ];

    /// Instantiate the kernel for this scheme
    pub fn create(self) -> Box<dyn Kernel> {
        match self {
            Solver::Euler1 => Box::new(Euler1),
            Solver::Euler2 => Box::new(Euler2),
            Solver::Euler3 => Box::new(Euler3),
            Solver::Euler4 => Box::new(Euler4),
            Solver::ModifiedMidpoint => Box::new(ModifiedMidpoint),
            Solver::Conservation => Box::new(Conservation::default()),
        }
    }

    /// Canonical name, as accepted by [`FromStr`] and used in config files
    pub fn name(self) -> &'static str {
        match self {
            Solver::Euler1 => "euler1",
            Solver::Euler2 => "euler2",
            Solver::Euler3 => "euler3",
            Solver::Euler4 => "euler4",
            Solver::ModifiedMidpoint => "modified_midpoint",
            Solver::Conservation => "conservation",
        }
    }

    /// Comma-separated canonical names, for error messages and `--list-solvers`
    pub fn list_available() -> String {
        Self::ALL
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Solver {
    type Err = SimulationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        // Short aliases for convenience
        match name {
            "euler1" | "euler" | "explicit_euler" => Ok(Solver::Euler1),
            "euler2" | "semi_implicit_euler" => Ok(Solver::Euler2),
            "euler3" => Ok(Solver::Euler3),
            "euler4" => Ok(Solver::Euler4),
            "modified_midpoint" | "midpoint" | "mm" => Ok(Solver::ModifiedMidpoint),
            "conservation" | "energy" => Ok(Solver::Conservation),
            _ => Err(SimulationError::UnknownSolver(
                name.to_string(),
                Self::list_available(),
            )),
        }
    }
}
