use crate::core::io::xyz::Frame;
use crate::core::models::system::ParticleSystem;
use crate::engine::config::EvaluationConfig;
use crate::engine::context::Context;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Energy summary of one trajectory frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameEnergy {
    pub frame: usize,
    pub potential_energy: f64,
    /// Largest force magnitude on any particle, when forces were computed.
    pub max_force: Option<f64>,
}

/// Evaluates every frame against the forces of `system`.
///
/// A single `Context` is created up front, so parameter and particle-index
/// errors are reported before any frame is processed. Results are returned in
/// frame order.
#[instrument(skip_all, name = "evaluate_workflow")]
pub fn run(
    system: &ParticleSystem,
    frames: &[Frame],
    config: EvaluationConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<FrameEnergy>, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Preparing Context",
    });
    let context = Context::new(system, config)?;
    reporter.report(Progress::PhaseFinish);
    reporter.report(Progress::Message(format!(
        "{} force(s) over {} particle(s)",
        context.num_forces(),
        context.num_particles()
    )));

    if frames.is_empty() {
        warn!("No frames to evaluate.");
        return Ok(Vec::new());
    }

    info!("Evaluating {} frame(s).", frames.len());
    reporter.report(Progress::FramesStart {
        total: frames.len() as u64,
    });

    let evaluate_frame = |(index, frame): (usize, &Frame)| -> Result<FrameEnergy, EngineError> {
        let state = context.evaluate(&frame.positions)?;
        reporter.report(Progress::FrameEvaluated { index });
        Ok(FrameEnergy {
            frame: index,
            potential_energy: state.potential_energy,
            max_force: state.max_force(),
        })
    };

    #[cfg(not(feature = "parallel"))]
    let results: Result<Vec<_>, _> = frames.iter().enumerate().map(evaluate_frame).collect();

    #[cfg(feature = "parallel")]
    let results: Result<Vec<_>, _> = frames.par_iter().enumerate().map(evaluate_frame).collect();

    reporter.report(Progress::FramesFinish);
    let results = results?;

    info!("Evaluated {} frame(s).", results.len());
    Ok(results)
}
