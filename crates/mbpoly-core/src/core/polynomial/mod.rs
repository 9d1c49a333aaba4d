//! # Polynomial Module
//!
//! Evaluation of the permutationally invariant polynomial describing the two-body
//! interaction energy of the water dimer.
//!
//! ## Overview
//!
//! The 15 internal coordinates of the dimer are mapped onto 24 symmetrized
//! monomials of degree one and two. The energy is the dot product of these
//! monomials with a vector of fitted coefficients. Both the basis and the term
//! order are fixed; coefficients must be supplied in the same order.
//!
//! ## Key Components
//!
//! - [`model`] - The [`PolyModel`] evaluator and its argument errors
//! - [`symmetry`] - Coordinate permutations under which the basis is invariant
//!
//! ## Usage
//!
//! ```
//! use mbpoly::core::polynomial::{NUM_TERMS, NUM_VARIABLES, PolyModel};
//!
//! let a = [1.0; NUM_TERMS];
//! let mut x = [0.0; NUM_VARIABLES];
//! x[6] = 1.0;
//! assert_eq!(PolyModel::eval_direct(&a, &x), 2.0);
//! assert!(PolyModel::eval(&a, &x[..14]).is_err());
//! ```

pub mod model;
mod monomials;
pub mod symmetry;

pub use model::{PolyError, PolyModel};
pub use monomials::{NUM_TERMS, NUM_VARIABLES};
