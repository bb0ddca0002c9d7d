//! Module with the random generation facilities used for masks, noise and
//! binary secret keys.
//!
//! A scalar-level [`RandomGenerator`] wraps the byte-oriented csprng and
//! samples values from one of the [`Distribution`] types through the
//! [`RandomGenerable`] trait.

mod gaussian;
mod generator;
mod uniform;
mod uniform_binary;

pub use gaussian::*;
pub use generator::*;
pub use uniform::*;
pub use uniform_binary::*;

/// A marker trait implemented by the supported random distributions.
pub trait Distribution: sealed::Sealed + Copy {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Uniform {}
    impl Sealed for super::UniformBinary {}
    impl Sealed for super::Gaussian<f64> {}
}

impl Distribution for Uniform {}
impl Distribution for UniformBinary {}
impl Distribution for Gaussian<f64> {}

/// A trait for scalars that can be sampled from a given distribution.
pub trait RandomGenerable<D: Distribution>
where
    Self: Sized,
{
    fn generate_one<G: ByteRandomGenerator>(generator: &mut RandomGenerator<G>, distribution: D)
        -> Self;

    fn fill_slice<G: ByteRandomGenerator>(
        generator: &mut RandomGenerator<G>,
        distribution: D,
        slice: &mut [Self],
    ) {
        for elt in slice.iter_mut() {
            *elt = Self::generate_one(generator, distribution);
        }
    }
}
