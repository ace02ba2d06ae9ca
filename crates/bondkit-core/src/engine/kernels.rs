use super::error::EngineError;
use crate::core::forcefield::force::Force;
use crate::core::forcefield::harmonic_bond::{BondTerm, HarmonicBondForce};
use crate::core::forcefield::potentials;
use crate::core::forcefield::term::ForceEnergy;
use nalgebra::{Point3, Vector3};
use tracing::{debug, trace};

const MIN_BOND_DISTANCE: f64 = 1e-12;

/// Evaluates one force from a private copy of its parameters.
pub trait ForceKernel: Send + Sync {
    /// Computes the energy and per-particle forces for the given positions.
    fn evaluate(
        &self,
        positions: &[Point3<f64>],
        periodic_box: Option<&Vector3<f64>>,
    ) -> Result<ForceEnergy, EngineError>;

    /// Replaces the cached parameters with the current values from `force`.
    ///
    /// On error the cached parameters are left unchanged.
    fn copy_parameters(&mut self, force: &Force) -> Result<(), EngineError>;

    fn force_group(&self) -> u8;
}

/// Builds the kernel matching the variant of `force`.
pub fn build_kernel(
    force: &Force,
    num_particles: usize,
) -> Result<Box<dyn ForceKernel>, EngineError> {
    match force {
        Force::HarmonicBond(bonds) => {
            Ok(Box::new(HarmonicBondKernel::new(bonds, num_particles)?))
        }
    }
}

/// Reference CPU kernel for [`HarmonicBondForce`].
#[derive(Debug, Clone)]
pub struct HarmonicBondKernel {
    name: String,
    bonds: Vec<BondTerm>,
    force_group: u8,
    uses_pbc: bool,
}

impl HarmonicBondKernel {
    /// Snapshots every bond of `force`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ParticleIndexOutOfRange`] if a bond refers to a
    /// particle index that is not below `num_particles`.
    pub fn new(force: &HarmonicBondForce, num_particles: usize) -> Result<Self, EngineError> {
        for (bond_index, bond) in force.bonds().iter().enumerate() {
            for particle in [bond.particle_a, bond.particle_b] {
                if particle >= num_particles {
                    return Err(EngineError::ParticleIndexOutOfRange {
                        bond: bond_index,
                        particle,
                        num_particles,
                    });
                }
            }
        }
        debug!(
            "Initialized harmonic bond kernel '{}' with {} bonds.",
            force.name(),
            force.num_bonds()
        );

        Ok(Self {
            name: force.name().to_string(),
            bonds: force.bonds().to_vec(),
            force_group: force.force_group(),
            uses_pbc: force.uses_periodic_boundary_conditions(),
        })
    }

    pub fn num_bonds(&self) -> usize {
        self.bonds.len()
    }

    fn copy_from(&mut self, force: &HarmonicBondForce) -> Result<(), EngineError> {
        if force.num_bonds() != self.bonds.len() {
            return Err(EngineError::BondCountChanged {
                expected: self.bonds.len(),
                found: force.num_bonds(),
            });
        }
        if let Some(bond) = self
            .bonds
            .iter()
            .zip(force.bonds())
            .position(|(cached, updated)| cached.particles() != updated.particles())
        {
            return Err(EngineError::BondParticlesChanged { bond });
        }

        self.bonds.copy_from_slice(force.bonds());
        self.name = force.name().to_string();
        self.force_group = force.force_group();
        self.uses_pbc = force.uses_periodic_boundary_conditions();
        debug!(
            "Copied parameters of {} bonds into kernel '{}'.",
            self.bonds.len(),
            self.name
        );
        Ok(())
    }
}

impl ForceKernel for HarmonicBondKernel {
    fn evaluate(
        &self,
        positions: &[Point3<f64>],
        periodic_box: Option<&Vector3<f64>>,
    ) -> Result<ForceEnergy, EngineError> {
        let periodic_box = if self.uses_pbc {
            Some(periodic_box.ok_or_else(|| EngineError::MissingPeriodicBox {
                force: self.name.clone(),
            })?)
        } else {
            None
        };

        let mut result = ForceEnergy::zeros(positions.len());
        for bond in &self.bonds {
            let (Some(pos_a), Some(pos_b)) =
                (positions.get(bond.particle_a), positions.get(bond.particle_b))
            else {
                return Err(EngineError::PositionCountMismatch {
                    expected: bond.particle_a.max(bond.particle_b) + 1,
                    found: positions.len(),
                });
            };

            let mut delta = pos_b - pos_a;
            if let Some(box_lengths) = periodic_box {
                delta = potentials::minimum_image(delta, box_lengths);
            }
            let dist = delta.norm();
            let (energy, d_energy) = potentials::harmonic_bond(dist, bond.length, bond.k);
            result.energy += energy;

            if dist > MIN_BOND_DISTANCE {
                let force_on_a = delta * (d_energy / dist);
                result.forces[bond.particle_a] += force_on_a;
                result.forces[bond.particle_b] -= force_on_a;
            }
        }
        trace!("Kernel '{}' energy: {:.6}", self.name, result.energy);
        Ok(result)
    }

    fn copy_parameters(&mut self, force: &Force) -> Result<(), EngineError> {
        match force {
            Force::HarmonicBond(bonds) => self.copy_from(bonds),
        }
    }

    fn force_group(&self) -> u8 {
        self.force_group
    }
}
