use crate::core::forcefield::force::Force;
use nalgebra::Vector3;

/// Represents a simulated system: its particles, periodic box and forces.
///
/// Particles are identified by their insertion index. Forces refer to them by
/// that index and are only checked against the particle count when a
/// `Context` is created from the system.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    /// Particle masses, indexed by particle.
    masses: Vec<f64>,
    /// Edge lengths of the rectangular periodic box, if any.
    periodic_box: Option<Vector3<f64>>,
    /// Forces acting on the particles, in insertion order.
    forces: Vec<Force>,
}

impl ParticleSystem {
    /// Creates a new, empty system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a particle and returns its index.
    pub fn add_particle(&mut self, mass: f64) -> usize {
        self.masses.push(mass);
        self.masses.len() - 1
    }

    pub fn num_particles(&self) -> usize {
        self.masses.len()
    }

    pub fn particle_mass(&self, index: usize) -> Option<f64> {
        self.masses.get(index).copied()
    }

    pub fn set_periodic_box(&mut self, box_lengths: Vector3<f64>) {
        self.periodic_box = Some(box_lengths);
    }

    pub fn periodic_box(&self) -> Option<&Vector3<f64>> {
        self.periodic_box.as_ref()
    }

    /// Adds a force and returns its index within the system.
    pub fn add_force(&mut self, force: Force) -> usize {
        self.forces.push(force);
        self.forces.len() - 1
    }

    pub fn num_forces(&self) -> usize {
        self.forces.len()
    }

    pub fn force(&self, index: usize) -> Option<&Force> {
        self.forces.get(index)
    }

    /// Retrieves a mutable reference to a force.
    ///
    /// Changes made through this reference are not seen by an existing
    /// `Context` until `update_parameters_in_context` is called for the force.
    pub fn force_mut(&mut self, index: usize) -> Option<&mut Force> {
        self.forces.get_mut(index)
    }

    pub fn forces(&self) -> impl Iterator<Item = &Force> {
        self.forces.iter()
    }

    /// Returns `true` if any force in the system uses periodic boundary conditions.
    pub fn uses_periodic_boundary_conditions(&self) -> bool {
        self.forces
            .iter()
            .any(Force::uses_periodic_boundary_conditions)
    }
}
