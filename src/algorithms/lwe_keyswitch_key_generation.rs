//! Module containing primitives pertaining to [`LweKeyswitchKey`] generation.

use crate::algorithms::lwe_encryption::encrypt_lwe_ciphertext;
use crate::commons::dispersion::DispersionParameter;
use crate::commons::generators::EncryptionRandomGenerator;
use crate::commons::math::decomposition::DecompositionTerm;
use crate::commons::math::random::ByteRandomGenerator;
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::parameters::{DecompositionBaseLog, DecompositionLevel, DecompositionLevelCount};
use crate::commons::traits::{Container, ContainerMut, Split};
use crate::entities::{LweCiphertext, LweKeyswitchKey, LweKeyswitchKeyOwned, LweSecretKey, Plaintext};

/// Fill an [`LweKeyswitchKey`] with an actual keyswitching key constructed
/// from an input and an output [`LweSecretKey`].
///
/// For each input key element, one output-key encryption per decomposition
/// level is produced, the one for level $l$ encrypting the key element scaled
/// by $2^{w - l \log_2(B)}$. Ciphertexts within a block are stored in
/// increasing level number (level $1$ first, level $\ell$ last).
pub fn generate_lwe_keyswitch_key<Scalar, InputKeyCont, OutputKeyCont, KSKeyCont, Gen>(
    input_lwe_sk: &LweSecretKey<InputKeyCont>,
    output_lwe_sk: &LweSecretKey<OutputKeyCont>,
    lwe_keyswitch_key: &mut LweKeyswitchKey<KSKeyCont>,
    noise_parameters: impl DispersionParameter,
    generator: &mut EncryptionRandomGenerator<Gen>,
) where
    Scalar: UnsignedTorus,
    InputKeyCont: Container<Element = Scalar>,
    OutputKeyCont: Container<Element = Scalar>,
    KSKeyCont: ContainerMut<Element = Scalar>,
    Gen: ByteRandomGenerator,
{
    assert!(
        lwe_keyswitch_key.input_key_lwe_dimension() == input_lwe_sk.lwe_dimension(),
        "The destination LweKeyswitchKey input LweDimension is not equal \
    to the input LweSecretKey LweDimension. Destination: {:?}, input: {:?}",
        lwe_keyswitch_key.input_key_lwe_dimension(),
        input_lwe_sk.lwe_dimension()
    );
    assert!(
        lwe_keyswitch_key.output_key_lwe_dimension() == output_lwe_sk.lwe_dimension(),
        "The destination LweKeyswitchKey output LweDimension is not equal \
    to the output LweSecretKey LweDimension. Destination: {:?}, output: {:?}",
        lwe_keyswitch_key.output_key_lwe_dimension(),
        output_lwe_sk.lwe_dimension()
    );

    let decomp_base_log = lwe_keyswitch_key.decomposition_base_log();
    let decomp_level_count = lwe_keyswitch_key.decomposition_level_count();
    let output_lwe_size = lwe_keyswitch_key.output_lwe_size();
    let input_key_element_encrypted_size = lwe_keyswitch_key.input_key_element_encrypted_size();

    // Independent noise ranges per input key element, so the noise of a given
    // block does not depend on how many blocks were generated before it.
    let gen_iter = generator
        .fork_ksk_to_lwe_blocks::<Scalar>(
            input_lwe_sk.lwe_dimension(),
            decomp_level_count,
            output_lwe_size,
        )
        .unwrap();

    // Iterate over the input key elements and the destination lwe_keyswitch_key memory
    for ((&input_key_element, keyswitch_key_block), mut loop_generator) in input_lwe_sk
        .as_ref()
        .iter()
        .zip(lwe_keyswitch_key.as_mut().into_chunks(input_key_element_encrypted_size))
        .zip(gen_iter)
    {
        for (level, cell) in (1..=decomp_level_count.0)
            .map(DecompositionLevel)
            .zip(keyswitch_key_block.into_chunks(output_lwe_size.0))
        {
            let message = Plaintext(
                DecompositionTerm::new(level, decomp_base_log, input_key_element)
                    .to_recomposition_summand(),
            );

            let mut level_key_ciphertext = LweCiphertext::from_container(cell);

            encrypt_lwe_ciphertext(
                output_lwe_sk,
                &mut level_key_ciphertext,
                message,
                noise_parameters,
                &mut loop_generator,
            );
        }
    }
}

/// Allocate a new [`LweKeyswitchKey`] and fill it with an actual keyswitching
/// key constructed from an input and an output [`LweSecretKey`].
///
/// See [`keyswitch_lwe_ciphertext`](`crate::algorithms::keyswitch_lwe_ciphertext`)
/// for usage.
pub fn allocate_and_generate_new_lwe_keyswitch_key<Scalar, InputKeyCont, OutputKeyCont, Gen>(
    input_lwe_sk: &LweSecretKey<InputKeyCont>,
    output_lwe_sk: &LweSecretKey<OutputKeyCont>,
    decomp_base_log: DecompositionBaseLog,
    decomp_level_count: DecompositionLevelCount,
    noise_parameters: impl DispersionParameter,
    generator: &mut EncryptionRandomGenerator<Gen>,
) -> LweKeyswitchKeyOwned<Scalar>
where
    Scalar: UnsignedTorus,
    InputKeyCont: Container<Element = Scalar>,
    OutputKeyCont: Container<Element = Scalar>,
    Gen: ByteRandomGenerator,
{
    let mut new_lwe_keyswitch_key = LweKeyswitchKeyOwned::new(
        Scalar::ZERO,
        decomp_base_log,
        decomp_level_count,
        input_lwe_sk.lwe_dimension(),
        output_lwe_sk.lwe_dimension(),
    );

    generate_lwe_keyswitch_key(
        input_lwe_sk,
        output_lwe_sk,
        &mut new_lwe_keyswitch_key,
        noise_parameters,
        generator,
    );

    new_lwe_keyswitch_key
}
