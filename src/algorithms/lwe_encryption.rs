//! Module containing primitives pertaining to [`LweCiphertext`] encryption
//! and decryption.

use crate::algorithms::slice_algorithms::*;
use crate::commons::dispersion::DispersionParameter;
use crate::commons::generators::EncryptionRandomGenerator;
use crate::commons::math::random::ByteRandomGenerator;
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::numeric::UnsignedInteger;
use crate::commons::parameters::LweSize;
use crate::commons::traits::{Container, ContainerMut};
use crate::entities::{LweCiphertext, LweCiphertextOwned, LweMask, LweSecretKey, Plaintext};

/// Encode a message by shifting it into the high bits of a [`Plaintext`].
///
/// The shift leaves the low bits free to absorb the encryption noise.
pub fn encode_plaintext<Scalar>(message: Scalar, encoding_shift: usize) -> Plaintext<Scalar>
where
    Scalar: UnsignedInteger,
{
    assert!(
        encoding_shift > 0 && encoding_shift < Scalar::BITS,
        "Got an invalid encoding shift: {encoding_shift}, it must lie in 1..{}",
        Scalar::BITS
    );
    Plaintext(message << encoding_shift)
}

/// Decode a noisy [`Plaintext`] by rounding to the nearest encoded message
/// and shifting it back down.
pub fn decode_plaintext<Scalar>(plaintext: Plaintext<Scalar>, encoding_shift: usize) -> Scalar
where
    Scalar: UnsignedInteger,
{
    assert!(
        encoding_shift > 0 && encoding_shift < Scalar::BITS,
        "Got an invalid encoding shift: {encoding_shift}, it must lie in 1..{}",
        Scalar::BITS
    );
    // Add the half-step so that the shift rounds to the nearest step
    plaintext
        .0
        .wrapping_add(Scalar::ONE << (encoding_shift - 1))
        >> encoding_shift
}

/// Convenience function to share the core logic of the LWE encryption between
/// all functions needing it.
pub fn fill_lwe_mask_and_body_for_encryption<Scalar, KeyCont, OutputCont, Gen>(
    lwe_secret_key: &LweSecretKey<KeyCont>,
    output_mask: &mut LweMask<OutputCont>,
    output_body: &mut Scalar,
    encoded: Plaintext<Scalar>,
    noise_parameters: impl DispersionParameter,
    generator: &mut EncryptionRandomGenerator<Gen>,
) where
    Scalar: UnsignedTorus,
    KeyCont: Container<Element = Scalar>,
    OutputCont: ContainerMut<Element = Scalar>,
    Gen: ByteRandomGenerator,
{
    assert!(
        output_mask.lwe_dimension() == lwe_secret_key.lwe_dimension(),
        "Mismatch between LweDimension of output mask and LweSecretKey. \
        Got {:?} in output, and {:?} in secret key.",
        output_mask.lwe_dimension(),
        lwe_secret_key.lwe_dimension()
    );

    // generate a uniformly random mask
    generator.fill_slice_with_random_mask(output_mask.as_mut());

    // generate an error from the normal distribution described by std_dev
    *output_body = generator.random_noise(noise_parameters);

    // compute the multisum between the secret key and the mask
    *output_body = (*output_body).wrapping_add(slice_wrapping_dot_product(
        output_mask.as_ref(),
        lwe_secret_key.as_ref(),
    ));

    // Add the encoded message
    *output_body = (*output_body).wrapping_add(encoded.0);
}

/// Encrypt an input plaintext in an output [`LweCiphertext`].
pub fn encrypt_lwe_ciphertext<Scalar, KeyCont, OutputCont, Gen>(
    lwe_secret_key: &LweSecretKey<KeyCont>,
    output: &mut LweCiphertext<OutputCont>,
    encoded: Plaintext<Scalar>,
    noise_parameters: impl DispersionParameter,
    generator: &mut EncryptionRandomGenerator<Gen>,
) where
    Scalar: UnsignedTorus,
    KeyCont: Container<Element = Scalar>,
    OutputCont: ContainerMut<Element = Scalar>,
    Gen: ByteRandomGenerator,
{
    assert!(
        output.lwe_size().to_lwe_dimension() == lwe_secret_key.lwe_dimension(),
        "Mismatch between LweDimension of output ciphertext and input secret key. \
        Got {:?} in output, and {:?} in secret key.",
        output.lwe_size().to_lwe_dimension(),
        lwe_secret_key.lwe_dimension()
    );

    let (mut mask, body) = output.get_mut_mask_and_body();

    fill_lwe_mask_and_body_for_encryption(
        lwe_secret_key,
        &mut mask,
        body,
        encoded,
        noise_parameters,
        generator,
    );
}

/// Allocate a new [`LweCiphertext`] and encrypt an input plaintext in it.
pub fn allocate_and_encrypt_new_lwe_ciphertext<Scalar, KeyCont, Gen>(
    lwe_secret_key: &LweSecretKey<KeyCont>,
    encoded: Plaintext<Scalar>,
    noise_parameters: impl DispersionParameter,
    generator: &mut EncryptionRandomGenerator<Gen>,
) -> LweCiphertextOwned<Scalar>
where
    Scalar: UnsignedTorus,
    KeyCont: Container<Element = Scalar>,
    Gen: ByteRandomGenerator,
{
    let mut new_ct =
        LweCiphertextOwned::new(Scalar::ZERO, lwe_secret_key.lwe_dimension().to_lwe_size());

    encrypt_lwe_ciphertext(
        lwe_secret_key,
        &mut new_ct,
        encoded,
        noise_parameters,
        generator,
    );

    new_ct
}

/// Fill an [`LweCiphertext`] with a trivial encryption of the input
/// plaintext, i.e. a ciphertext with an all-zero mask and no noise.
///
/// A trivial encryption hides nothing, it is useful to get exact expected
/// values when testing homomorphic operations.
pub fn trivially_encrypt_lwe_ciphertext<Scalar, OutputCont>(
    output: &mut LweCiphertext<OutputCont>,
    encoded: Plaintext<Scalar>,
) where
    Scalar: UnsignedInteger,
    OutputCont: ContainerMut<Element = Scalar>,
{
    output.as_mut().fill(Scalar::ZERO);
    *output.get_mut_body() = encoded.0;
}

/// Allocate a new [`LweCiphertext`] and fill it with a trivial encryption of
/// the input plaintext.
pub fn allocate_and_trivially_encrypt_new_lwe_ciphertext<Scalar>(
    lwe_size: LweSize,
    encoded: Plaintext<Scalar>,
) -> LweCiphertextOwned<Scalar>
where
    Scalar: UnsignedInteger,
{
    let mut new_ct = LweCiphertextOwned::new(Scalar::ZERO, lwe_size);

    *new_ct.get_mut_body() = encoded.0;

    new_ct
}

/// Decrypt an [`LweCiphertext`] and return the noisy plaintext.
pub fn decrypt_lwe_ciphertext<Scalar, KeyCont, InputCont>(
    lwe_secret_key: &LweSecretKey<KeyCont>,
    lwe_ciphertext: &LweCiphertext<InputCont>,
) -> Plaintext<Scalar>
where
    Scalar: UnsignedInteger,
    KeyCont: Container<Element = Scalar>,
    InputCont: Container<Element = Scalar>,
{
    assert!(
        lwe_ciphertext.lwe_size().to_lwe_dimension() == lwe_secret_key.lwe_dimension(),
        "Mismatch between LweDimension of input ciphertext and input secret key. \
        Got {:?} in input, and {:?} in secret key.",
        lwe_ciphertext.lwe_size().to_lwe_dimension(),
        lwe_secret_key.lwe_dimension()
    );

    let (mask, body) = lwe_ciphertext.get_mask_and_body();

    Plaintext((*body).wrapping_sub(slice_wrapping_dot_product(
        mask.as_ref(),
        lwe_secret_key.as_ref(),
    )))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithms::allocate_and_generate_new_binary_lwe_secret_key;
    use crate::commons::dispersion::Variance;
    use crate::commons::generators::{DeterministicSeeder, SecretRandomGenerator};
    use crate::commons::math::random::{DefaultRandomGenerator, Seed, Seeder};
    use crate::commons::parameters::LweDimension;

    #[test]
    fn encrypt_decrypt_round_trip() {
        let lwe_dimension = LweDimension(742);
        let mut seeder = DeterministicSeeder::<DefaultRandomGenerator>::new(Seed(0));
        let mut secret_generator =
            SecretRandomGenerator::<DefaultRandomGenerator>::new(seeder.seed());
        let mut encryption_generator =
            EncryptionRandomGenerator::<DefaultRandomGenerator>::new(seeder.seed(), &mut seeder);

        let lwe_secret_key =
            allocate_and_generate_new_binary_lwe_secret_key(lwe_dimension, &mut secret_generator);

        let msg = 3u64;
        let encoding_shift = 60;
        let plaintext = encode_plaintext(msg, encoding_shift);

        let ct = allocate_and_encrypt_new_lwe_ciphertext(
            &lwe_secret_key,
            plaintext,
            Variance(1e-25),
            &mut encryption_generator,
        );

        let decrypted = decrypt_lwe_ciphertext(&lwe_secret_key, &ct);
        assert_eq!(decode_plaintext(decrypted, encoding_shift), msg);
    }

    #[test]
    fn ciphertexts_add_homomorphically() {
        let lwe_dimension = LweDimension(742);
        let mut seeder = DeterministicSeeder::<DefaultRandomGenerator>::new(Seed(1));
        let mut secret_generator =
            SecretRandomGenerator::<DefaultRandomGenerator>::new(seeder.seed());
        let mut encryption_generator =
            EncryptionRandomGenerator::<DefaultRandomGenerator>::new(seeder.seed(), &mut seeder);

        let lwe_secret_key =
            allocate_and_generate_new_binary_lwe_secret_key(lwe_dimension, &mut secret_generator);

        let encoding_shift = 60;
        let mut lhs = allocate_and_encrypt_new_lwe_ciphertext(
            &lwe_secret_key,
            encode_plaintext(2u64, encoding_shift),
            Variance(1e-25),
            &mut encryption_generator,
        );
        let rhs = allocate_and_encrypt_new_lwe_ciphertext(
            &lwe_secret_key,
            encode_plaintext(3u64, encoding_shift),
            Variance(1e-25),
            &mut encryption_generator,
        );

        slice_wrapping_add_assign(lhs.as_mut(), rhs.as_ref());

        let decrypted = decrypt_lwe_ciphertext(&lwe_secret_key, &lhs);
        assert_eq!(decode_plaintext(decrypted, encoding_shift), 5);
    }

    #[test]
    fn trivial_encryption_decrypts_exactly_under_any_key() {
        let lwe_dimension = LweDimension(100);
        let mut secret_generator = crate::commons::test_tools::new_secret_random_generator();
        let lwe_secret_key = allocate_and_generate_new_binary_lwe_secret_key::<u64, _>(
            lwe_dimension,
            &mut secret_generator,
        );

        let plaintext = Plaintext(1u64 << 48);
        let ct =
            allocate_and_trivially_encrypt_new_lwe_ciphertext(lwe_dimension.to_lwe_size(), plaintext);

        assert!(ct.get_mask().as_ref().iter().all(|&elt| elt == 0));
        assert_eq!(decrypt_lwe_ciphertext(&lwe_secret_key, &ct), plaintext);
    }
}
