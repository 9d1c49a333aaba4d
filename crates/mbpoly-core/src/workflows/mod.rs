//! # Workflows Module
//!
//! High-level entry points that tie the evaluator and the input readers together.
//!
//! - **Batch Evaluation** ([`evaluate`]) - Energies for a set of configurations,
//!   together with summary statistics.

pub mod evaluate;
