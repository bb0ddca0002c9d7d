use crate::commons::math::random::{
    ByteRandomGenerator, RandomGenerable, RandomGenerator, Seed, Seeder, Uniform,
};

/// A [`Seeder`] backed by a csprng.
///
/// A user-provided [`Seeder`] implementation can be arbitrarily slow, so it is
/// only consulted once, when the engine is initialized. Subsequent seeds are
/// drawn from a csprng keyed by that single seed, which is safe as long as the
/// initial seed comes from a proper entropy source.
pub struct DeterministicSeeder<G: ByteRandomGenerator> {
    generator: RandomGenerator<G>,
}

impl<G: ByteRandomGenerator> DeterministicSeeder<G> {
    pub fn new(seed: Seed) -> Self {
        Self {
            generator: RandomGenerator::new(seed),
        }
    }
}

impl<G: ByteRandomGenerator> Seeder for DeterministicSeeder<G> {
    fn seed(&mut self) -> Seed {
        Seed(u128::generate_one(&mut self.generator, Uniform))
    }

    fn is_available() -> bool
    where
        Self: Sized,
    {
        true
    }
}
