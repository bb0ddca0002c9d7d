//! Module with traits used by the crate entities.

mod container;

pub use container::*;
