//! # Core Models Module
//!
//! The particle system that force parameter tables refer to by index.
//!
//! ```ignore
//! use bondkit::core::models::system::ParticleSystem;
//!
//! let mut system = ParticleSystem::new();
//! let a = system.add_particle(12.011);
//! let b = system.add_particle(1.008);
//!
//! let mut bonds = HarmonicBondForce::new();
//! bonds.add_bond(a, b, 0.109, 284512.0);
//! system.add_force(bonds.into());
//! ```

pub mod system;
