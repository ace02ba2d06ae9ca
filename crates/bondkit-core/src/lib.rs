//! # bondkit Core Library
//!
//! A small molecular-mechanics library built around the harmonic bond force:
//! an append-only table of bond stretch parameters, and a reference CPU engine
//! that turns those parameters into energies and per-particle forces.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data: bond parameter tables
//!   (`HarmonicBondForce`), the closed set of force kinds (`Force`), the
//!   particle system, potential functions and file I/O.
//!
//! - **[`engine`]: The Logic Core.** A `Context` holds cached copies of every
//!   force's parameters and evaluates them for given positions. Parameter edits
//!   reach a context only through an explicit `update_parameters_in_context`
//!   call.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures such as
//!   evaluating every frame of a trajectory.

pub mod core;
pub mod engine;
pub mod workflows;
