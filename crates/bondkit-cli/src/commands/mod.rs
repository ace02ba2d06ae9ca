pub mod evaluate;
pub mod inspect;
pub mod set;

use crate::error::Result;
use bondkit::core::forcefield::harmonic_bond::HarmonicBondForce;
use bondkit::core::forcefield::params::BondForceFile;
use bondkit::engine::error::EngineError;
use std::path::Path;
use tracing::info;

fn load_bond_force(path: &Path) -> Result<HarmonicBondForce> {
    info!("Loading bond parameters from {:?}", path);
    let force = BondForceFile::load(path).map_err(EngineError::from)?;
    info!("Loaded {} bond(s) from '{}'.", force.num_bonds(), force.name());
    Ok(force)
}
