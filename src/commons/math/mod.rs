//! Module containing the mathematical tools the algorithms are built on.

pub mod decomposition;
pub mod random;
pub mod torus;
