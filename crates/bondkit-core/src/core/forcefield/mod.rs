//! # Force Field Module
//!
//! Parameter tables and potential functions for the bonded terms of a
//! molecular-mechanics model.
//!
//! ## Key Components
//!
//! - [`harmonic_bond`] - The harmonic bond table: an append-only, index-addressed
//!   list of bond stretch parameters
//! - [`force`] - The closed set of force kinds a system can hold
//! - [`params`] - TOML and CSV parameter files
//! - [`term`] - Energy and per-particle force accumulation
//!
//! ## Usage
//!
//! ```ignore
//! use bondkit::core::forcefield::harmonic_bond::HarmonicBondForce;
//!
//! let mut bonds = HarmonicBondForce::new();
//! let index = bonds.add_bond(0, 1, 0.15, 300000.0);
//! bonds.set_bond_parameters(index, 0, 1, 0.16, 290000.0)?;
//! ```

pub mod force;
pub mod harmonic_bond;
pub mod params;
pub(crate) mod potentials;
pub mod term;
