//! # Workflows Module
//!
//! High-level entry points that tie the `engine` and `core` layers together.
//!
//! - **Trajectory Evaluation** ([`evaluate`]) - Energies and peak forces for every
//!   frame of a coordinate file.

pub mod evaluate;
