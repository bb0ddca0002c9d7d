//! Module containing primitives pertaining to the LWE keyswitch operation.

use crate::algorithms::slice_algorithms::*;
use crate::commons::math::decomposition::SignedDecomposer;
use crate::commons::numeric::UnsignedInteger;
use crate::commons::traits::{Container, ContainerMut, Split};
use crate::entities::{LweCiphertext, LweKeyswitchKey};

/// Keyswitch an [`LweCiphertext`] encrypted under an input
/// [`LweSecretKey`](`crate::entities::LweSecretKey`) to an output
/// [`LweSecretKey`](`crate::entities::LweSecretKey`).
///
/// The output ciphertext is set to $(0, \dots, 0, b\_{\mathsf{in}})$ and the
/// scaled encryptions of the decomposed input mask elements are subtracted
/// from it, which cancels the $\langle \vec{a}\_{\mathsf{in}},
/// \vec{s}\_{\mathsf{in}} \rangle$ part of the body up to the decomposition
/// rounding error.
pub fn keyswitch_lwe_ciphertext<Scalar, KSKCont, InputCont, OutputCont>(
    lwe_keyswitch_key: &LweKeyswitchKey<KSKCont>,
    input_lwe_ciphertext: &LweCiphertext<InputCont>,
    output_lwe_ciphertext: &mut LweCiphertext<OutputCont>,
) where
    Scalar: UnsignedInteger,
    KSKCont: Container<Element = Scalar>,
    InputCont: Container<Element = Scalar>,
    OutputCont: ContainerMut<Element = Scalar>,
{
    assert!(
        lwe_keyswitch_key.input_key_lwe_dimension()
            == input_lwe_ciphertext.lwe_size().to_lwe_dimension(),
        "Mismatched input LweDimension. \
        LweKeyswitchKey input LweDimension: {:?}, input LweCiphertext LweDimension {:?}.",
        lwe_keyswitch_key.input_key_lwe_dimension(),
        input_lwe_ciphertext.lwe_size().to_lwe_dimension(),
    );
    assert!(
        lwe_keyswitch_key.output_key_lwe_dimension()
            == output_lwe_ciphertext.lwe_size().to_lwe_dimension(),
        "Mismatched output LweDimension. \
        LweKeyswitchKey output LweDimension: {:?}, output LweCiphertext LweDimension {:?}.",
        lwe_keyswitch_key.output_key_lwe_dimension(),
        output_lwe_ciphertext.lwe_size().to_lwe_dimension(),
    );

    // Clear the output ciphertext, as it will get updated gradually
    output_lwe_ciphertext.as_mut().fill(Scalar::ZERO);

    // Copy the input body to the output ciphertext
    *output_lwe_ciphertext.get_mut_body() = *input_lwe_ciphertext.get_body();

    // We instantiate a decomposer
    let decomposer = SignedDecomposer::new(
        lwe_keyswitch_key.decomposition_base_log(),
        lwe_keyswitch_key.decomposition_level_count(),
    );

    let input_key_element_encrypted_size = lwe_keyswitch_key.input_key_element_encrypted_size();
    let output_lwe_size = lwe_keyswitch_key.output_lwe_size();

    for (keyswitch_key_block, &input_mask_element) in lwe_keyswitch_key
        .as_ref()
        .into_chunks(input_key_element_encrypted_size)
        .zip(input_lwe_ciphertext.get_mask().as_ref())
    {
        let decomposition_iter = decomposer.decompose(input_mask_element);
        // loop over the number of levels in reverse (from highest to lowest)
        for (level_key_ciphertext, decomposed) in keyswitch_key_block
            .into_chunks(output_lwe_size.0)
            .rev()
            .zip(decomposition_iter)
        {
            slice_wrapping_sub_scalar_mul_assign(
                output_lwe_ciphertext.as_mut(),
                level_key_ciphertext,
                decomposed.value(),
            );
        }
    }
}
