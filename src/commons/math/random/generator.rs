use crate::commons::math::random::{Gaussian, RandomGenerable, Uniform, UniformBinary};
use tfhe_csprng::generators::{BytesPerChild, ChildrenCount};

pub use tfhe_csprng::generators::{DefaultRandomGenerator, ForkError, RandomGenerator as ByteRandomGenerator};
pub use tfhe_csprng::seeders::{Seed, Seeder};

/// A cryptographically secure random number generator, generic over the
/// byte-oriented csprng backing it.
///
/// Fresh generators are unbounded; generators obtained through
/// [`try_fork`](`Self::try_fork`) are bounded to the byte budget they were
/// assigned at fork time.
pub struct RandomGenerator<G: ByteRandomGenerator>(G);

impl<G: ByteRandomGenerator> RandomGenerator<G> {
    /// Create a new generator seeded with the given [`Seed`].
    pub fn new(seed: Seed) -> Self {
        Self(G::new(seed))
    }

    /// Generate the next raw uniform byte.
    pub fn generate_next(&mut self) -> u8 {
        // A generator used within its byte budget always has a next byte.
        self.0.next().unwrap()
    }

    /// Return the number of remaining bytes, if the generator is bounded.
    pub fn remaining_bytes(&self) -> Option<usize> {
        usize::try_from(self.0.remaining_bytes().0).ok()
    }

    /// Fork the generator into `n_child` children, each able to output
    /// `child_bytes` bytes.
    ///
    /// The parent generator is shifted past the bytes assigned to the
    /// children, so values drawn from a child do not depend on how much the
    /// parent or its siblings have been used.
    pub fn try_fork(
        &mut self,
        n_child: usize,
        child_bytes: usize,
    ) -> Result<impl Iterator<Item = Self>, ForkError> {
        Ok(self
            .0
            .try_fork(ChildrenCount(n_child), BytesPerChild(child_bytes))?
            .map(Self))
    }

    /// Generate a random uniform scalar.
    pub fn random_uniform<Scalar>(&mut self) -> Scalar
    where
        Scalar: RandomGenerable<Uniform>,
    {
        Scalar::generate_one(self, Uniform)
    }

    /// Fill the slice with random uniform scalars.
    pub fn fill_slice_with_random_uniform<Scalar>(&mut self, output: &mut [Scalar])
    where
        Scalar: RandomGenerable<Uniform>,
    {
        Scalar::fill_slice(self, Uniform, output);
    }

    /// Generate a random binary scalar.
    pub fn random_uniform_binary<Scalar>(&mut self) -> Scalar
    where
        Scalar: RandomGenerable<UniformBinary>,
    {
        Scalar::generate_one(self, UniformBinary)
    }

    /// Fill the slice with random binary scalars.
    pub fn fill_slice_with_random_uniform_binary<Scalar>(&mut self, output: &mut [Scalar])
    where
        Scalar: RandomGenerable<UniformBinary>,
    {
        Scalar::fill_slice(self, UniformBinary, output);
    }

    /// Generate a random gaussian scalar, centered on `mean` with standard
    /// deviation `std`.
    pub fn random_gaussian<Scalar>(&mut self, mean: f64, std: f64) -> Scalar
    where
        (Scalar, Scalar): RandomGenerable<Gaussian<f64>>,
    {
        <(Scalar, Scalar)>::generate_one(self, Gaussian { std, mean }).0
    }

    /// Fill the slice with random gaussian scalars, centered on `mean` with
    /// standard deviation `std`.
    pub fn fill_slice_with_random_gaussian<Scalar>(
        &mut self,
        output: &mut [Scalar],
        mean: f64,
        std: f64,
    ) where
        (Scalar, Scalar): RandomGenerable<Gaussian<f64>>,
    {
        output.chunks_mut(2).for_each(|s| {
            let (g0, g1) = <(Scalar, Scalar)>::generate_one(self, Gaussian { std, mean });
            if let Some(elt) = s.get_mut(0) {
                *elt = g0;
            }
            if let Some(elt) = s.get_mut(1) {
                *elt = g1;
            }
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commons::test_tools::any_seed;

    #[test]
    fn fork_children_byte_budget_is_enforced() {
        let mut gen = RandomGenerator::<DefaultRandomGenerator>::new(any_seed());
        assert_eq!(gen.remaining_bytes(), None);

        let mut children = gen.try_fork(2, 16).unwrap().collect::<Vec<_>>();
        for child in children.iter() {
            assert_eq!(child.remaining_bytes(), Some(16));
        }
        let _: u128 = children[0].random_uniform();
        assert_eq!(children[0].remaining_bytes(), Some(0));
    }

    #[test]
    fn fork_is_deterministic_and_independent_of_sibling_use() {
        let seed = any_seed();

        let mut gen = RandomGenerator::<DefaultRandomGenerator>::new(seed);
        let mut children = gen.try_fork(2, 64).unwrap().collect::<Vec<_>>();
        // consume the first child entirely
        let mut first = vec![0u64; 8];
        children[0].fill_slice_with_random_uniform(&mut first);
        let mut second = vec![0u64; 8];
        children[1].fill_slice_with_random_uniform(&mut second);

        let mut gen = RandomGenerator::<DefaultRandomGenerator>::new(seed);
        let mut children = gen.try_fork(2, 64).unwrap().collect::<Vec<_>>();
        // do not touch the first child this time
        let mut second_bis = vec![0u64; 8];
        children[1].fill_slice_with_random_uniform(&mut second_bis);

        assert_eq!(second, second_bis);
    }

    #[test]
    fn random_uniform_binary_is_binary() {
        let mut gen = RandomGenerator::<DefaultRandomGenerator>::new(any_seed());
        let mut buf = vec![0u64; 1000];
        gen.fill_slice_with_random_uniform_binary(&mut buf);
        assert!(buf.iter().all(|&b| b == 0 || b == 1));
        // a run of 1000 all-equal bits has probability 2^-999
        assert!(buf.iter().any(|&b| b == 1));
        assert!(buf.iter().any(|&b| b == 0));
    }
}
