//! # Core Module
//!
//! Stateless building blocks of the library: the polynomial evaluator itself and
//! the readers that turn coefficient and coordinate files into validated inputs.
//!
//! - **Evaluation** ([`polynomial`]) - Monomial basis, energy evaluation and the
//!   fragment's permutation symmetry
//! - **File I/O** ([`io`]) - Coefficient sets (TOML) and coordinate sets (CSV)

pub mod io;
pub mod polynomial;
