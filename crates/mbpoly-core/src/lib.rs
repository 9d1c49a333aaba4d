//! # mbpoly
//!
//! Evaluation of the permutationally invariant polynomial that models the two-body
//! interaction energy of the water dimer.
//!
//! ## Layout
//!
//! - **[`core`]: The Foundation.** The stateless evaluator (`PolyModel`), the fixed
//!   monomial basis, the dimer's permutation symmetry, and readers for coefficient
//!   and coordinate files.
//!
//! - **[`engine`]: Runtime plumbing.** Progress reporting hooks used by long-running
//!   operations.
//!
//! - **[`workflows`]: The Public API.** Batch evaluation of many configurations with a
//!   single coefficient set, with logging and progress reporting.

pub mod core;
pub mod engine;
pub mod workflows;
