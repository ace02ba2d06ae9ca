use thiserror::Error;

use super::config::ConfigError;
use crate::core::forcefield::harmonic_bond::BondError;
use crate::core::forcefield::params::ParamLoadError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(
        "Bond {bond} refers to particle {particle}, but the system has only {num_particles} particles"
    )]
    ParticleIndexOutOfRange {
        bond: usize,
        particle: usize,
        num_particles: usize,
    },

    #[error("Expected positions for {expected} particles, got {found}")]
    PositionCountMismatch { expected: usize, found: usize },

    #[error("The number of bonds has changed from {expected} to {found}")]
    BondCountChanged { expected: usize, found: usize },

    #[error(
        "The particles of bond {bond} have changed; only lengths and force constants may be updated"
    )]
    BondParticlesChanged { bond: usize },

    #[error("Force index {index} is out of range (context has {count} forces)")]
    ForceIndexOutOfRange { index: usize, count: usize },

    #[error("Force '{force}' uses periodic boundary conditions but no periodic box is set")]
    MissingPeriodicBox { force: String },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error(transparent)]
    Bond(#[from] BondError),

    #[error("Failed to load parameters: {source}")]
    Params {
        #[from]
        source: ParamLoadError,
    },
}
