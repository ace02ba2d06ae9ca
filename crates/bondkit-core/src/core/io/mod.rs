//! Provides input/output functionality for particle coordinate files.
//!
//! Parameter files for forces live next to the forces themselves in
//! [`crate::core::forcefield::params`]; this module only deals with positions.

pub mod traits;
pub mod xyz;
