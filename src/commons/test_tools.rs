#![doc(hidden)]

use std::ops::Range;

use rand::Rng;

use crate::commons::dispersion::Variance;
use crate::commons::generators::{EncryptionRandomGenerator, SecretRandomGenerator};
use crate::commons::math::random::{
    DefaultRandomGenerator, RandomGenerable, RandomGenerator, Seed, Seeder, Uniform,
};
use crate::commons::numeric::UnsignedInteger;

pub fn variance(samples: &[f64]) -> Variance {
    let num_samples = samples.len();
    let mean = samples.iter().sum::<f64>() / (num_samples as f64);
    Variance(
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / ((num_samples - 1) as f64),
    )
}

pub fn new_random_generator() -> RandomGenerator<DefaultRandomGenerator> {
    RandomGenerator::new(any_seed())
}

pub fn new_secret_random_generator() -> SecretRandomGenerator<DefaultRandomGenerator> {
    SecretRandomGenerator::new(any_seed())
}

pub fn new_encryption_random_generator() -> EncryptionRandomGenerator<DefaultRandomGenerator> {
    EncryptionRandomGenerator::new(any_seed(), &mut UnsafeRandSeeder)
}

pub fn any_seed() -> Seed {
    Seed(rand::thread_rng().gen())
}

pub fn any_uint<T: UnsignedInteger + RandomGenerable<Uniform>>() -> T {
    new_random_generator().random_uniform()
}

pub fn random_usize_between(range: Range<usize>) -> usize {
    rand::thread_rng().gen_range(range)
}

pub struct UnsafeRandSeeder;

impl Seeder for UnsafeRandSeeder {
    fn seed(&mut self) -> Seed {
        Seed(rand::thread_rng().gen())
    }

    fn is_available() -> bool {
        true
    }
}
