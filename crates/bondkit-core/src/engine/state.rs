use crate::core::forcefield::term::ForceEnergy;
use nalgebra::Vector3;

/// The result of evaluating a `Context` at one set of positions.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub potential_energy: f64,
    /// Per-particle forces, present only when the context was configured to
    /// compute them.
    pub forces: Option<Vec<Vector3<f64>>>,
}

impl State {
    pub(crate) fn from_force_energy(term: ForceEnergy, include_forces: bool) -> Self {
        Self {
            potential_energy: term.energy,
            forces: include_forces.then_some(term.forces),
        }
    }

    /// Largest force magnitude on any particle, or `None` if forces were not computed.
    pub fn max_force(&self) -> Option<f64> {
        self.forces
            .as_ref()
            .map(|forces| forces.iter().map(|f| f.norm()).fold(0.0, f64::max))
    }
}
