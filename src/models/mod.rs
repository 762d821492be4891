//! Gumbel model implementation.
//!
//! Models are implemented as small, pure functions so that the query engine,
//! reports and plots can share them.

pub mod curve;
pub mod gumbel;

pub use curve::*;
pub use gumbel::*;
