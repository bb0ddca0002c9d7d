//! Module containing common mathematical objects and utilities used throughout
//! the crate.

pub mod dispersion;
pub mod generators;
pub mod math;
pub mod numeric;
pub mod parameters;
pub mod traits;

#[cfg(test)]
pub mod test_tools;
