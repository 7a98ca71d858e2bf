//! Core numeric primitives (Vector, Matrix).
//!
//! These types back the efficacy matrix and the learned factor matrices.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
