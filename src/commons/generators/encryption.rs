use crate::commons::dispersion::DispersionParameter;
use crate::commons::math::random::{
    ByteRandomGenerator, ForkError, Gaussian, RandomGenerable, RandomGenerator, Seed, Seeder,
    Uniform,
};
use crate::commons::numeric::UnsignedInteger;
use crate::commons::parameters::{DecompositionLevelCount, LweDimension, LweSize};

/// A random number generator which can be used to encrypt messages.
///
/// The mask and the noise of a ciphertext are drawn from two separate
/// generators. The mask generator is seeded with a caller-visible [`Seed`],
/// while the noise generator is seeded privately through the provided
/// [`Seeder`].
pub struct EncryptionRandomGenerator<G: ByteRandomGenerator> {
    // Only used to generate the mask elements.
    mask: RandomGenerator<G>,
    // Only used to generate the noise elements.
    noise: RandomGenerator<G>,
}

impl<G: ByteRandomGenerator> EncryptionRandomGenerator<G> {
    // S is ?Sized to allow Box<dyn Seeder> to be passed.
    pub fn new<S: Seeder + ?Sized>(seed: Seed, seeder: &mut S) -> Self {
        Self {
            mask: RandomGenerator::new(seed),
            noise: RandomGenerator::new(seeder.seed()),
        }
    }

    // Allows to seed the noise generator. For testing purpose only.
    #[cfg(test)]
    pub(crate) fn seed_noise_generator(&mut self, seed: Seed) {
        println!("WARNING: The noise generator of the encryption random generator was seeded.");
        self.noise = RandomGenerator::new(seed);
    }

    /// Return the number of remaining bytes for the mask generator, if the
    /// generator is bounded.
    pub fn remaining_bytes(&self) -> Option<usize> {
        self.mask.remaining_bytes()
    }

    // Forks the generator, when splitting a keyswitch key into the blocks of
    // ciphertexts encrypting a single input key element.
    pub(crate) fn fork_ksk_to_lwe_blocks<T: UnsignedInteger>(
        &mut self,
        input_lwe_dimension: LweDimension,
        level: DecompositionLevelCount,
        output_lwe_size: LweSize,
    ) -> Result<impl Iterator<Item = EncryptionRandomGenerator<G>>, ForkError> {
        let mask_bytes =
            level.0 * mask_bytes_per_lwe::<T>(output_lwe_size.to_lwe_dimension());
        let noise_bytes = level.0 * noise_bytes_per_lwe();
        self.try_fork(input_lwe_dimension.0, mask_bytes, noise_bytes)
    }

    // Forks both generators into n_child parts with the given byte budgets.
    fn try_fork(
        &mut self,
        n_child: usize,
        mask_bytes: usize,
        noise_bytes: usize,
    ) -> Result<impl Iterator<Item = EncryptionRandomGenerator<G>>, ForkError> {
        let mask_iter = self.mask.try_fork(n_child, mask_bytes)?;
        let noise_iter = self.noise.try_fork(n_child, noise_bytes)?;

        Ok(mask_iter
            .zip(noise_iter)
            .map(|(mask, noise)| EncryptionRandomGenerator { mask, noise }))
    }

    // Fills the slice with random uniform values, using the mask generator.
    pub(crate) fn fill_slice_with_random_mask<Scalar>(&mut self, output: &mut [Scalar])
    where
        Scalar: RandomGenerable<Uniform>,
    {
        self.mask.fill_slice_with_random_uniform(output);
    }

    // Sample a noise value, using the noise generator.
    pub(crate) fn random_noise<Scalar>(&mut self, std: impl DispersionParameter) -> Scalar
    where
        Scalar: RandomGenerable<Gaussian<f64>>,
    {
        Scalar::generate_one(
            &mut self.noise,
            Gaussian {
                std: std.get_standard_dev(),
                mean: 0.,
            },
        )
    }
}

fn mask_bytes_per_coef<T: UnsignedInteger>() -> usize {
    T::BITS / 8
}

fn mask_bytes_per_lwe<T: UnsignedInteger>(lwe_dimension: LweDimension) -> usize {
    lwe_dimension.0 * mask_bytes_per_coef::<T>()
}

fn noise_bytes_per_coef() -> usize {
    // We use f64 to sample the noise for every precision, and we need 4/pi
    // inputs to generate such an output (here we take 32 to keep a safety
    // margin).
    8 * 32
}

fn noise_bytes_per_lwe() -> usize {
    // Here we take 3 to keep a safety margin
    noise_bytes_per_coef() * 3
}
