//! # Engine Module
//!
//! The reference evaluation engine. It turns the parameter tables held by a
//! `ParticleSystem` into potential energies and per-particle forces.
//!
//! ## Parameter Synchronisation
//!
//! A [`context::Context`] copies every force's parameters when it is created.
//! Editing a force afterwards is a local change only; the host must call
//! `Context::update_parameters_in_context` before the next evaluation for the
//! edit to take effect. The engine never picks up changes implicitly.
//!
//! ## Architecture
//!
//! - **Kernels** ([`kernels`]) - One kernel per force variant, each holding a private parameter copy
//! - **Context** ([`context`]) - Owns the kernels and sums their contributions
//! - **Configuration** ([`config`]) - Force-group selection and output options
//! - **Results** ([`state`]) - Energy and optional forces for one evaluation
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod context;
pub mod error;
pub mod kernels;
pub mod progress;
pub mod state;
