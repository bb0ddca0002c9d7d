//! Module with the definition of the prelude.
//!
//! The prelude re-exports the entities, the algorithms, the engine surface
//! and the parameter types in one flat namespace.

pub use crate::algorithms::*;
pub use crate::commons::dispersion::*;
pub use crate::commons::generators::*;
pub use crate::commons::math::decomposition::{
    DecompositionTerm, SignedDecomposer, SignedDecompositionIter,
};
pub use crate::commons::math::random::{
    ByteRandomGenerator, DefaultRandomGenerator, ForkError, Gaussian, RandomGenerable,
    RandomGenerator, Seed, Seeder, Uniform, UniformBinary,
};
pub use crate::commons::math::torus::UnsignedTorus;
pub use crate::commons::numeric::*;
pub use crate::commons::parameters::*;
pub use crate::commons::traits::*;
pub use crate::engine::*;
pub use crate::entities::*;
pub use crate::seeders::{new_seeder, EntropyTier};
