use super::load_bond_force;
use crate::cli::EvaluateArgs;
use crate::config::PartialEvaluateConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use bondkit::{
    core::io::{
        traits::CoordinateFile,
        xyz::{Frame, XyzFile},
    },
    core::models::system::ParticleSystem,
    engine::progress::ProgressReporter,
    workflows::{self, evaluate::FrameEnergy},
};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// Masses do not enter the bond energy; every particle gets the same one.
const PARTICLE_MASS: f64 = 1.0;

#[derive(Debug, Serialize)]
struct ReportRow {
    frame: usize,
    potential_energy: f64,
    max_force: Option<f64>,
}

pub fn run(args: EvaluateArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialEvaluateConfig::from_file(path)?,
        None => PartialEvaluateConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let settings = partial_config.merge_with_cli(&args)?;

    let bonds = load_bond_force(&args.params)?;

    info!("Loading frames from {:?}", &args.positions);
    let frames =
        XyzFile::read_from_path(&args.positions).map_err(|e| CliError::FileParsing {
            path: args.positions.clone(),
            source: e.into(),
        })?;

    if frames.is_empty() {
        warn!("Coordinate file contained no frames.");
        println!("Warning: no frames found in {}", args.positions.display());
        return Ok(());
    }

    let num_particles = frames.first().map_or(0, Frame::num_particles);
    let mut system = ParticleSystem::new();
    for _ in 0..num_particles {
        system.add_particle(PARTICLE_MASS);
    }
    if let Some(periodic_box) = settings.periodic_box {
        system.set_periodic_box(periodic_box);
    }
    system.add_force(bonds.into());

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Evaluating {} frame(s) of {} particle(s)...",
        frames.len(),
        num_particles
    );
    let results = workflows::evaluate::run(&system, &frames, settings.evaluation, &reporter)?;

    print_results(&results);

    if let Some(report_path) = &args.report {
        write_report(&results, report_path)?;
        println!("✓ Report written to: {}", report_path.display());
    }

    Ok(())
}

fn print_results(results: &[FrameEnergy]) {
    println!("{:>6}  {:>18}  {:>18}", "Frame", "Energy", "Max |F|");
    for result in results {
        let max_force = result
            .max_force
            .map_or_else(|| "-".to_string(), |f| format!("{:.6}", f));
        println!(
            "{:>6}  {:>18.6}  {:>18}",
            result.frame, result.potential_energy, max_force
        );
    }
}

fn write_report(results: &[FrameEnergy], path: &Path) -> Result<()> {
    info!("Writing report for {} frame(s) to {:?}", results.len(), path);
    let to_report_error = |source: csv::Error| CliError::Report {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(to_report_error)?;
    for result in results {
        writer
            .serialize(ReportRow {
                frame: result.frame,
                potential_energy: result.potential_energy,
                max_force: result.max_force,
            })
            .map_err(to_report_error)?;
    }
    writer.flush()?;
    Ok(())
}
