//! Mathematical utilities: the reduced variate and least squares.

pub mod ols;
pub mod reduced;

pub use ols::*;
pub use reduced::*;
