//! Core compute primitives (Vector, Matrix).
//!
//! These types carry the dense numeric data of the analysis pipeline:
//! contingency tables, residual matrices, and coordinate tables.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
