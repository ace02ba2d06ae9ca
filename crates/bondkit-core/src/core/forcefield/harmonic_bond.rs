use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_FORCE_NAME: &str = "HarmonicBondForce";
pub const MAX_FORCE_GROUP: u8 = 31;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BondError {
    #[error("Bond index {index} is out of range (force has {count} bonds)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Force group {0} is out of range (must be between 0 and 31)")]
    InvalidForceGroup(u8),
}

/// Parameters of a single harmonic bond stretch term.
///
/// Particle indices refer to an external particle collection and are not
/// checked here; a `Context` validates them when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondTerm {
    pub particle_a: usize,
    pub particle_b: usize,
    /// Equilibrium length of the bond.
    pub length: f64,
    /// Harmonic force constant.
    pub k: f64,
}

impl BondTerm {
    pub fn new(particle_a: usize, particle_b: usize, length: f64, k: f64) -> Self {
        Self {
            particle_a,
            particle_b,
            length,
            k,
        }
    }

    #[inline]
    pub fn particles(&self) -> (usize, usize) {
        (self.particle_a, self.particle_b)
    }
}

/// An interaction between pairs of particles that varies harmonically with
/// the distance between them.
///
/// Create a `HarmonicBondForce` and call [`add_bond`](Self::add_bond) once for
/// each bond. After a bond has been added its parameters can be modified with
/// [`set_bond_parameters`](Self::set_bond_parameters). Bonds are never removed,
/// so an index returned by `add_bond` stays valid for the lifetime of the force.
///
/// Modifying parameters only changes this table. A `Context` that was created
/// earlier keeps using its own copy until
/// `Context::update_parameters_in_context` is called.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonicBondForce {
    bonds: Vec<BondTerm>,
    name: String,
    force_group: u8,
    uses_pbc: bool,
}

impl Default for HarmonicBondForce {
    fn default() -> Self {
        Self {
            bonds: Vec::new(),
            name: DEFAULT_FORCE_NAME.to_string(),
            force_group: 0,
            uses_pbc: false,
        }
    }
}

impl HarmonicBondForce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of harmonic bond stretch terms.
    #[inline]
    pub fn num_bonds(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    /// Appends a bond term and returns its index.
    ///
    /// The returned index equals the number of bonds before the call.
    pub fn add_bond(&mut self, particle_a: usize, particle_b: usize, length: f64, k: f64) -> usize {
        self.bonds.push(BondTerm::new(particle_a, particle_b, length, k));
        self.bonds.len() - 1
    }

    /// Returns the parameters stored for the bond at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::IndexOutOfRange`] if `index >= num_bonds()`.
    pub fn bond_parameters(&self, index: usize) -> Result<BondTerm, BondError> {
        self.bonds
            .get(index)
            .copied()
            .ok_or(BondError::IndexOutOfRange {
                index,
                count: self.bonds.len(),
            })
    }

    /// Overwrites the parameters of the bond at `index`.
    ///
    /// On error nothing is modified.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::IndexOutOfRange`] if `index >= num_bonds()`.
    pub fn set_bond_parameters(
        &mut self,
        index: usize,
        particle_a: usize,
        particle_b: usize,
        length: f64,
        k: f64,
    ) -> Result<(), BondError> {
        let count = self.bonds.len();
        let bond = self
            .bonds
            .get_mut(index)
            .ok_or(BondError::IndexOutOfRange { index, count })?;
        *bond = BondTerm::new(particle_a, particle_b, length, k);
        Ok(())
    }

    /// All bond terms in index order.
    #[inline]
    pub fn bonds(&self) -> &[BondTerm] {
        &self.bonds
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn force_group(&self) -> u8 {
        self.force_group
    }

    pub fn set_force_group(&mut self, group: u8) -> Result<(), BondError> {
        if group > MAX_FORCE_GROUP {
            return Err(BondError::InvalidForceGroup(group));
        }
        self.force_group = group;
        Ok(())
    }

    pub fn uses_periodic_boundary_conditions(&self) -> bool {
        self.uses_pbc
    }

    pub fn set_uses_periodic_boundary_conditions(&mut self, periodic: bool) {
        self.uses_pbc = periodic;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_force_is_empty_with_default_attributes() {
        let force = HarmonicBondForce::new();
        assert_eq!(force.num_bonds(), 0);
        assert!(force.is_empty());
        assert_eq!(force.name(), DEFAULT_FORCE_NAME);
        assert_eq!(force.force_group(), 0);
        assert!(!force.uses_periodic_boundary_conditions());
    }

    #[test]
    fn add_bond_returns_previous_count() {
        let mut force = HarmonicBondForce::new();
        for n in 0..10 {
            let index = force.add_bond(n, n + 1, 0.1, 1000.0);
            assert_eq!(index, n);
            assert_eq!(force.num_bonds(), n + 1);
        }
    }

    #[test]
    fn add_bond_then_read_returns_same_values() {
        let mut force = HarmonicBondForce::new();
        let index = force.add_bond(0, 1, 0.15, 300000.0);

        assert_eq!(index, 0);
        assert_eq!(force.num_bonds(), 1);
        assert_eq!(
            force.bond_parameters(0),
            Ok(BondTerm::new(0, 1, 0.15, 300000.0))
        );
    }

    #[test]
    fn add_bond_does_not_validate_particles_or_values() {
        let mut force = HarmonicBondForce::new();
        force.add_bond(7, 7, -1.0, -5.0);
        let bond = force.bond_parameters(0).unwrap();
        assert_eq!(bond.particles(), (7, 7));
        assert_eq!(bond.length, -1.0);
        assert_eq!(bond.k, -5.0);
    }

    #[test]
    fn bond_parameters_on_empty_force_is_out_of_range() {
        let force = HarmonicBondForce::new();
        assert_eq!(
            force.bond_parameters(0),
            Err(BondError::IndexOutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn bond_parameters_past_end_is_out_of_range() {
        let mut force = HarmonicBondForce::new();
        force.add_bond(0, 1, 0.1, 1.0);
        force.add_bond(1, 2, 0.1, 1.0);
        assert!(matches!(
            force.bond_parameters(2),
            Err(BondError::IndexOutOfRange { index: 2, count: 2 })
        ));
        assert!(force.bond_parameters(usize::MAX).is_err());
    }

    #[test]
    fn repeated_reads_return_identical_results() {
        let mut force = HarmonicBondForce::new();
        force.add_bond(3, 4, 0.11, 12345.0);
        let first = force.bond_parameters(0);
        let second = force.bond_parameters(0);
        assert_eq!(first, second);
    }

    #[test]
    fn set_bond_parameters_changes_only_target_index() {
        let mut force = HarmonicBondForce::new();
        force.add_bond(2, 3, 0.12, 250000.0);
        force.add_bond(4, 5, 0.10, 400000.0);

        force.set_bond_parameters(0, 2, 3, 0.13, 260000.0).unwrap();

        assert_eq!(
            force.bond_parameters(0),
            Ok(BondTerm::new(2, 3, 0.13, 260000.0))
        );
        assert_eq!(
            force.bond_parameters(1),
            Ok(BondTerm::new(4, 5, 0.10, 400000.0))
        );
    }

    #[test]
    fn set_bond_parameters_can_change_particles() {
        let mut force = HarmonicBondForce::new();
        force.add_bond(0, 1, 0.1, 1.0);
        force.set_bond_parameters(0, 5, 6, 0.2, 2.0).unwrap();
        assert_eq!(force.bond_parameters(0).unwrap().particles(), (5, 6));
    }

    #[test]
    fn set_bond_parameters_out_of_range_leaves_table_unchanged() {
        let mut force = HarmonicBondForce::new();
        force.add_bond(0, 1, 0.1, 1.0);
        let before = force.clone();

        let result = force.set_bond_parameters(1, 9, 9, 9.0, 9.0);

        assert_eq!(
            result,
            Err(BondError::IndexOutOfRange { index: 1, count: 1 })
        );
        assert_eq!(force, before);
    }

    #[test]
    fn set_bond_parameters_on_empty_force_fails() {
        let mut force = HarmonicBondForce::new();
        assert!(force.set_bond_parameters(0, 0, 1, 0.1, 1.0).is_err());
        assert_eq!(force.num_bonds(), 0);
    }

    #[test]
    fn bonds_returns_entries_in_insertion_order() {
        let mut force = HarmonicBondForce::new();
        force.add_bond(0, 1, 0.1, 1.0);
        force.add_bond(1, 2, 0.2, 2.0);
        force.add_bond(2, 3, 0.3, 3.0);
        let lengths: Vec<f64> = force.bonds().iter().map(|b| b.length).collect();
        assert_eq!(lengths, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn set_force_group_accepts_upper_bound_and_rejects_beyond() {
        let mut force = HarmonicBondForce::new();
        force.set_force_group(31).unwrap();
        assert_eq!(force.force_group(), 31);

        assert_eq!(
            force.set_force_group(32),
            Err(BondError::InvalidForceGroup(32))
        );
        assert_eq!(force.force_group(), 31);
    }

    #[test]
    fn periodic_flag_and_name_are_settable() {
        let mut force = HarmonicBondForce::new();
        force.set_uses_periodic_boundary_conditions(true);
        force.set_name("backbone");
        assert!(force.uses_periodic_boundary_conditions());
        assert_eq!(force.name(), "backbone");
    }
}
