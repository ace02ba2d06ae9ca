//! # Core Module
//!
//! Stateless building blocks: parameter tables, the particle system, potential
//! functions and file I/O.
//!
//! - **Force Parameters** ([`forcefield`]) - Bond tables, force variants, parameter files
//! - **Particle Representation** ([`models`]) - Particles, periodic box and attached forces
//! - **File I/O** ([`io`]) - Multi-frame coordinate files

pub mod forcefield;
pub mod io;
pub mod models;
