use super::harmonic_bond::HarmonicBondForce;

/// The closed set of force kinds a `ParticleSystem` can hold.
///
/// Each variant owns its parameter table. Evaluation is performed by the
/// matching kernel in [`crate::engine::kernels`].
#[derive(Debug, Clone, PartialEq)]
pub enum Force {
    HarmonicBond(HarmonicBondForce),
}

impl Force {
    pub fn name(&self) -> &str {
        match self {
            Force::HarmonicBond(f) => f.name(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Force::HarmonicBond(_) => "harmonic-bond",
        }
    }

    pub fn force_group(&self) -> u8 {
        match self {
            Force::HarmonicBond(f) => f.force_group(),
        }
    }

    pub fn uses_periodic_boundary_conditions(&self) -> bool {
        match self {
            Force::HarmonicBond(f) => f.uses_periodic_boundary_conditions(),
        }
    }

    pub fn as_harmonic_bond(&self) -> Option<&HarmonicBondForce> {
        match self {
            Force::HarmonicBond(f) => Some(f),
        }
    }

    pub fn as_harmonic_bond_mut(&mut self) -> Option<&mut HarmonicBondForce> {
        match self {
            Force::HarmonicBond(f) => Some(f),
        }
    }
}

impl From<HarmonicBondForce> for Force {
    fn from(force: HarmonicBondForce) -> Self {
        Force::HarmonicBond(force)
    }
}
