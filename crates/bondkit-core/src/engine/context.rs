use super::config::EvaluationConfig;
use super::error::EngineError;
use super::kernels::{ForceKernel, build_kernel};
use super::state::State;
use crate::core::forcefield::term::ForceEnergy;
use crate::core::models::system::ParticleSystem;
use nalgebra::{Point3, Vector3};
use tracing::{debug, info, instrument};

/// Evaluation state built from a `ParticleSystem`.
///
/// Creating a context reads every force's parameters once and validates the
/// particle indices they refer to. Later edits to the system are not visible
/// here until [`update_parameters_in_context`](Self::update_parameters_in_context)
/// is called for the edited force.
pub struct Context {
    kernels: Vec<Box<dyn ForceKernel>>,
    num_particles: usize,
    periodic_box: Option<Vector3<f64>>,
    config: EvaluationConfig,
}

impl Context {
    #[instrument(skip_all, name = "context_creation")]
    pub fn new(system: &ParticleSystem, config: EvaluationConfig) -> Result<Self, EngineError> {
        let num_particles = system.num_particles();
        let kernels = system
            .forces()
            .map(|force| build_kernel(force, num_particles))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Created context with {} particles and {} forces.",
            num_particles,
            kernels.len()
        );

        Ok(Self {
            kernels,
            num_particles,
            periodic_box: system.periodic_box().copied(),
            config,
        })
    }

    pub fn num_forces(&self) -> usize {
        self.kernels.len()
    }

    pub fn num_particles(&self) -> usize {
        self.num_particles
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Computes the potential energy (and forces, if configured) of every
    /// force whose group is selected by the configuration.
    pub fn evaluate(&self, positions: &[Point3<f64>]) -> Result<State, EngineError> {
        if positions.len() != self.num_particles {
            return Err(EngineError::PositionCountMismatch {
                expected: self.num_particles,
                found: positions.len(),
            });
        }

        let mut total = ForceEnergy::zeros(self.num_particles);
        for kernel in &self.kernels {
            if !self.config.includes_group(kernel.force_group()) {
                continue;
            }
            total += kernel.evaluate(positions, self.periodic_box.as_ref())?;
        }

        Ok(State::from_force_energy(total, self.config.include_forces))
    }

    /// Copies the current parameters of force `force_index` from `system` into
    /// this context.
    ///
    /// Only per-bond values may change. Adding bonds or changing which
    /// particles a bond connects requires a new context.
    pub fn update_parameters_in_context(
        &mut self,
        force_index: usize,
        system: &ParticleSystem,
    ) -> Result<(), EngineError> {
        let count = self.kernels.len();
        let (Some(kernel), Some(force)) =
            (self.kernels.get_mut(force_index), system.force(force_index))
        else {
            return Err(EngineError::ForceIndexOutOfRange {
                index: force_index,
                count,
            });
        };
        kernel.copy_parameters(force)?;
        debug!(
            "Updated parameters of force {} ('{}') in context.",
            force_index,
            force.name()
        );
        Ok(())
    }
}
