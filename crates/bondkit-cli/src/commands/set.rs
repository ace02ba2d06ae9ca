use super::load_bond_force;
use crate::cli::SetArgs;
use crate::error::Result;
use bondkit::core::forcefield::params::{BondForceFile, ParamFormat};
use bondkit::engine::error::EngineError;
use tracing::{info, warn};

pub fn run(args: SetArgs) -> Result<()> {
    let mut force = load_bond_force(&args.params)?;
    let current = force
        .bond_parameters(args.index)
        .map_err(EngineError::from)?;

    let particle_a = args.particle_a.unwrap_or(current.particle_a);
    let particle_b = args.particle_b.unwrap_or(current.particle_b);
    let length = args.length.unwrap_or(current.length);
    let k = args.k.unwrap_or(current.k);

    force
        .set_bond_parameters(args.index, particle_a, particle_b, length, k)
        .map_err(EngineError::from)?;
    info!(
        "Bond {} changed from ({}, {}, {}, {}) to ({}, {}, {}, {}).",
        args.index,
        current.particle_a,
        current.particle_b,
        current.length,
        current.k,
        particle_a,
        particle_b,
        length,
        k
    );

    let output = args.output.as_deref().unwrap_or(&args.params);
    if ParamFormat::from_path(output) == Some(ParamFormat::Csv)
        && (force.force_group() != 0 || force.uses_periodic_boundary_conditions())
    {
        warn!(
            "CSV output keeps bonds only; force group {} and periodic flag are not written.",
            force.force_group()
        );
    }
    BondForceFile::save(&force, output).map_err(EngineError::from)?;

    println!(
        "✓ Bond {} set to particles ({}, {}), length {}, k {} in {}",
        args.index,
        particle_a,
        particle_b,
        length,
        k,
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use bondkit::core::forcefield::harmonic_bond::{BondError, BondTerm, HarmonicBondForce};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_params(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("bonds.toml");
        let mut force = HarmonicBondForce::new();
        force.add_bond(0, 1, 0.1, 1000.0);
        force.add_bond(1, 2, 0.15, 500.0);
        BondForceFile::save(&force, &path).unwrap();
        path
    }

    fn args(params: &Path, index: usize) -> SetArgs {
        SetArgs {
            params: params.to_path_buf(),
            index,
            particle_a: None,
            particle_b: None,
            length: None,
            k: None,
            output: None,
        }
    }

    #[test]
    fn run_updates_only_given_fields_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_params(&dir);

        run(SetArgs {
            length: Some(0.2),
            ..args(&path, 1)
        })
        .unwrap();

        let force = BondForceFile::load(&path).unwrap();
        assert_eq!(force.num_bonds(), 2);
        assert_eq!(force.bond_parameters(0).unwrap(), BondTerm::new(0, 1, 0.1, 1000.0));
        assert_eq!(force.bond_parameters(1).unwrap(), BondTerm::new(1, 2, 0.2, 500.0));
    }

    #[test]
    fn run_writes_to_separate_output_in_its_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_params(&dir);
        let output = dir.path().join("edited.csv");

        run(SetArgs {
            particle_a: Some(3),
            k: Some(250.0),
            output: Some(output.clone()),
            ..args(&path, 0)
        })
        .unwrap();

        let original = BondForceFile::load(&path).unwrap();
        assert_eq!(original.bond_parameters(0).unwrap().particle_a, 0);
        let edited = BondForceFile::load(&output).unwrap();
        assert_eq!(edited.bond_parameters(0).unwrap(), BondTerm::new(3, 1, 0.1, 250.0));
    }

    #[test]
    fn run_fails_for_out_of_range_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_params(&dir);

        let result = run(args(&path, 2));
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::Bond(BondError::IndexOutOfRange {
                index: 2,
                count: 2
            })))
        ));
    }
}
