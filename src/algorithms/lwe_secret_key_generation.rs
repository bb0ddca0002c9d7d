//! Module containing primitives pertaining to [`LweSecretKey`] generation.

use crate::commons::generators::SecretRandomGenerator;
use crate::commons::math::random::{ByteRandomGenerator, RandomGenerable, UniformBinary};
use crate::commons::numeric::Numeric;
use crate::commons::parameters::LweDimension;
use crate::commons::traits::ContainerMut;
use crate::entities::{LweSecretKey, LweSecretKeyOwned};

/// Allocate a new [`LweSecretKey`] and fill it with uniformly random binary
/// coefficients.
pub fn allocate_and_generate_new_binary_lwe_secret_key<Scalar, Gen>(
    lwe_dimension: LweDimension,
    generator: &mut SecretRandomGenerator<Gen>,
) -> LweSecretKeyOwned<Scalar>
where
    Scalar: Numeric + RandomGenerable<UniformBinary>,
    Gen: ByteRandomGenerator,
{
    let mut lwe_secret_key = LweSecretKeyOwned::new_empty_key(Scalar::ZERO, lwe_dimension);

    generate_binary_lwe_secret_key(&mut lwe_secret_key, generator);

    lwe_secret_key
}

/// Fill an [`LweSecretKey`] with uniformly random binary coefficients.
pub fn generate_binary_lwe_secret_key<Scalar, InCont, Gen>(
    lwe_secret_key: &mut LweSecretKey<InCont>,
    generator: &mut SecretRandomGenerator<Gen>,
) where
    Scalar: RandomGenerable<UniformBinary>,
    InCont: ContainerMut<Element = Scalar>,
    Gen: ByteRandomGenerator,
{
    generator.fill_slice_with_random_uniform_binary(lwe_secret_key.as_mut());
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commons::test_tools::new_secret_random_generator;

    #[test]
    fn generated_key_is_binary() {
        let mut generator = new_secret_random_generator();
        let key = allocate_and_generate_new_binary_lwe_secret_key::<u64, _>(
            LweDimension(512),
            &mut generator,
        );

        assert_eq!(key.lwe_dimension(), LweDimension(512));
        assert!(key.as_ref().iter().all(|&elt| elt == 0 || elt == 1));
        // A 512-coefficient all-zero or all-one key does not happen by chance
        assert!(key.as_ref().iter().any(|&elt| elt == 0));
        assert!(key.as_ref().iter().any(|&elt| elt == 1));
    }
}
