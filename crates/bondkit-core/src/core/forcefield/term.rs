use nalgebra::Vector3;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Potential energy and per-particle forces produced by one or more kernels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForceEnergy {
    pub energy: f64,
    pub forces: Vec<Vector3<f64>>,
}

impl ForceEnergy {
    pub fn new(energy: f64, forces: Vec<Vector3<f64>>) -> Self {
        Self { energy, forces }
    }

    pub fn zeros(num_particles: usize) -> Self {
        Self {
            energy: 0.0,
            forces: vec![Vector3::zeros(); num_particles],
        }
    }

    /// Largest force magnitude acting on any particle.
    pub fn max_force_norm(&self) -> f64 {
        self.forces.iter().map(|f| f.norm()).fold(0.0, f64::max)
    }
}

impl AddAssign for ForceEnergy {
    fn add_assign(&mut self, rhs: Self) {
        self.energy += rhs.energy;
        if self.forces.len() < rhs.forces.len() {
            self.forces.resize(rhs.forces.len(), Vector3::zeros());
        }
        for (acc, f) in self.forces.iter_mut().zip(rhs.forces) {
            *acc += f;
        }
    }
}

impl Add for ForceEnergy {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sum for ForceEnergy {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, term| acc + term)
    }
}
