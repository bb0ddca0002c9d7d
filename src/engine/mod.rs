//! Module containing the [`LweEngine`] facade.
//!
//! The engine binds an entropy source at construction time and exposes every
//! cryptographic operation of the crate behind two parallel surfaces: a
//! checked surface which validates all parameters and returns typed
//! [`LweError`]s, and an unchecked surface which skips validation for call
//! sites that have already validated invariants upstream.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::algorithms::{
    allocate_and_generate_new_binary_lwe_secret_key, allocate_and_generate_new_lwe_keyswitch_key,
    decrypt_lwe_ciphertext, encrypt_lwe_ciphertext, keyswitch_lwe_ciphertext,
};
use crate::commons::dispersion::DispersionParameter;
use crate::commons::generators::{
    DeterministicSeeder, EncryptionRandomGenerator, SecretRandomGenerator,
};
use crate::commons::math::random::{DefaultRandomGenerator, Seeder};
use crate::commons::parameters::{DecompositionBaseLog, DecompositionLevelCount, LweDimension};
use crate::commons::traits::{Container, ContainerMut};
use crate::entities::{
    LweCiphertext, LweCiphertextMutView, LweCiphertextView, LweKeyswitchKey,
    LweKeyswitchKeyOwned, LweSecretKey, LweSecretKeyOwned, Plaintext,
};
use crate::seeders::{new_seeder, EntropyTier};

mod serialization;

/// The errors which can occur on the checked engine surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LweError {
    /// A parameter is zero or out of its valid range.
    InvalidParameter(&'static str),
    /// A buffer length does not match the length implied by the keys and
    /// parameters involved.
    SizeMismatch { expected: usize, found: usize },
    /// No entropy source matching the requested tier is available.
    EngineInitFailure(&'static str),
    /// A serialized buffer is malformed or truncated.
    DeserializationError(&'static str),
    /// Backing storage could not be obtained.
    AllocationFailure,
}

impl Display for LweError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::SizeMismatch { expected, found } => {
                write!(f, "size mismatch: expected {expected} elements, found {found}")
            }
            Self::EngineInitFailure(msg) => write!(f, "engine initialization failure: {msg}"),
            Self::DeserializationError(msg) => write!(f, "deserialization error: {msg}"),
            Self::AllocationFailure => write!(f, "allocation failure"),
        }
    }
}

impl Error for LweError {}

/// The entry point to the crate operations.
///
/// An engine owns two csprngs, one for secret key coefficients and one for
/// encryption masks and noise, both keyed from the single entropy source
/// bound at construction. Engines share no state: independent instances can
/// run fully in parallel.
pub struct LweEngine {
    /// A single csprng to generate secret key coefficients.
    secret_generator: SecretRandomGenerator<DefaultRandomGenerator>,
    /// Two csprngs to generate material for encryption, one publicly seeded
    /// for mask coefficients and one privately seeded for noise.
    encryption_generator: EncryptionRandomGenerator<DefaultRandomGenerator>,
}

impl LweEngine {
    /// Create a new engine bound to an entropy source of the requested
    /// [`EntropyTier`].
    pub fn new(tier: EntropyTier) -> Result<Self, LweError> {
        let seeder = new_seeder(tier).ok_or(LweError::EngineInitFailure(
            "no entropy source matching the requested tier is available on this machine",
        ))?;
        Ok(Self::with_seeder(seeder))
    }

    /// Create a new engine drawing its two generator seeds from the given
    /// [`Seeder`].
    ///
    /// The seeder is consulted exactly once; with a
    /// [`DeterministicSeeder`] this makes every operation of the engine
    /// reproducible.
    pub fn with_seeder(mut seeder: Box<dyn Seeder>) -> Self {
        let mut deterministic_seeder =
            DeterministicSeeder::<DefaultRandomGenerator>::new(seeder.seed());

        Self {
            secret_generator: SecretRandomGenerator::new(deterministic_seeder.seed()),
            encryption_generator: EncryptionRandomGenerator::new(
                deterministic_seeder.seed(),
                &mut deterministic_seeder,
            ),
        }
    }

    /// Generate a new binary [`LweSecretKey`].
    pub fn generate_new_lwe_secret_key(
        &mut self,
        lwe_dimension: LweDimension,
    ) -> Result<LweSecretKeyOwned<u64>, LweError> {
        if lwe_dimension.0 == 0 {
            return Err(LweError::InvalidParameter(
                "lwe_dimension must be greater than 0",
            ));
        }
        Ok(self.generate_new_lwe_secret_key_unchecked(lwe_dimension))
    }

    /// Unchecked variant of [`LweEngine::generate_new_lwe_secret_key`].
    ///
    /// Performs no parameter validation; a zero dimension panics instead of
    /// returning an error.
    pub fn generate_new_lwe_secret_key_unchecked(
        &mut self,
        lwe_dimension: LweDimension,
    ) -> LweSecretKeyOwned<u64> {
        allocate_and_generate_new_binary_lwe_secret_key(lwe_dimension, &mut self.secret_generator)
    }

    /// Encrypt a [`Plaintext`] in the given output [`LweCiphertext`].
    ///
    /// The plaintext is expected to be already encoded, see
    /// [`encode_plaintext`](`crate::algorithms::encode_plaintext`).
    pub fn encrypt_lwe_ciphertext<KeyCont, OutputCont>(
        &mut self,
        lwe_secret_key: &LweSecretKey<KeyCont>,
        output: &mut LweCiphertext<OutputCont>,
        encoded: Plaintext<u64>,
        noise_parameters: impl DispersionParameter,
    ) -> Result<(), LweError>
    where
        KeyCont: Container<Element = u64>,
        OutputCont: ContainerMut<Element = u64>,
    {
        let expected = lwe_secret_key.lwe_dimension().to_lwe_size().0;
        let found = output.lwe_size().0;
        if expected != found {
            return Err(LweError::SizeMismatch { expected, found });
        }
        self.encrypt_lwe_ciphertext_unchecked(lwe_secret_key, output, encoded, noise_parameters);
        Ok(())
    }

    /// Unchecked variant of [`LweEngine::encrypt_lwe_ciphertext`].
    ///
    /// Performs no size validation; a mismatched output buffer panics
    /// instead of returning an error.
    pub fn encrypt_lwe_ciphertext_unchecked<KeyCont, OutputCont>(
        &mut self,
        lwe_secret_key: &LweSecretKey<KeyCont>,
        output: &mut LweCiphertext<OutputCont>,
        encoded: Plaintext<u64>,
        noise_parameters: impl DispersionParameter,
    ) where
        KeyCont: Container<Element = u64>,
        OutputCont: ContainerMut<Element = u64>,
    {
        encrypt_lwe_ciphertext(
            lwe_secret_key,
            output,
            encoded,
            noise_parameters,
            &mut self.encryption_generator,
        );
    }

    /// Raw-slice variant of [`LweEngine::encrypt_lwe_ciphertext`], writing
    /// the mask then the body into caller-owned storage.
    pub fn encrypt_lwe_ciphertext_raw<KeyCont>(
        &mut self,
        lwe_secret_key: &LweSecretKey<KeyCont>,
        output: &mut [u64],
        encoded: Plaintext<u64>,
        noise_parameters: impl DispersionParameter,
    ) -> Result<(), LweError>
    where
        KeyCont: Container<Element = u64>,
    {
        let expected = lwe_secret_key.lwe_dimension().to_lwe_size().0;
        let found = output.len();
        if expected != found {
            return Err(LweError::SizeMismatch { expected, found });
        }
        let mut view = LweCiphertextMutView::from_container(output);
        self.encrypt_lwe_ciphertext_unchecked(lwe_secret_key, &mut view, encoded, noise_parameters);
        Ok(())
    }

    /// Decrypt an [`LweCiphertext`] and return the noisy plaintext.
    ///
    /// Decoding (rounding to the nearest plaintext step and shifting back)
    /// is the caller's responsibility, see
    /// [`decode_plaintext`](`crate::algorithms::decode_plaintext`).
    pub fn decrypt_lwe_ciphertext<KeyCont, InputCont>(
        &self,
        lwe_secret_key: &LweSecretKey<KeyCont>,
        lwe_ciphertext: &LweCiphertext<InputCont>,
    ) -> Result<Plaintext<u64>, LweError>
    where
        KeyCont: Container<Element = u64>,
        InputCont: Container<Element = u64>,
    {
        let expected = lwe_secret_key.lwe_dimension().to_lwe_size().0;
        let found = lwe_ciphertext.lwe_size().0;
        if expected != found {
            return Err(LweError::SizeMismatch { expected, found });
        }
        Ok(self.decrypt_lwe_ciphertext_unchecked(lwe_secret_key, lwe_ciphertext))
    }

    /// Unchecked variant of [`LweEngine::decrypt_lwe_ciphertext`].
    ///
    /// Performs no size validation; a mismatched ciphertext length panics
    /// instead of returning an error.
    pub fn decrypt_lwe_ciphertext_unchecked<KeyCont, InputCont>(
        &self,
        lwe_secret_key: &LweSecretKey<KeyCont>,
        lwe_ciphertext: &LweCiphertext<InputCont>,
    ) -> Plaintext<u64>
    where
        KeyCont: Container<Element = u64>,
        InputCont: Container<Element = u64>,
    {
        decrypt_lwe_ciphertext(lwe_secret_key, lwe_ciphertext)
    }

    /// Raw-slice variant of [`LweEngine::decrypt_lwe_ciphertext`].
    pub fn decrypt_lwe_ciphertext_raw<KeyCont>(
        &self,
        lwe_secret_key: &LweSecretKey<KeyCont>,
        lwe_ciphertext: &[u64],
    ) -> Result<Plaintext<u64>, LweError>
    where
        KeyCont: Container<Element = u64>,
    {
        let expected = lwe_secret_key.lwe_dimension().to_lwe_size().0;
        let found = lwe_ciphertext.len();
        if expected != found {
            return Err(LweError::SizeMismatch { expected, found });
        }
        let view = LweCiphertextView::from_container(lwe_ciphertext);
        Ok(self.decrypt_lwe_ciphertext_unchecked(lwe_secret_key, &view))
    }

    /// Generate a new [`LweKeyswitchKey`] from an input and an output
    /// [`LweSecretKey`].
    ///
    /// The decomposition parameters are a correctness and security tuning
    /// surface: a base and level count leaving too few decomposed bits do
    /// not fail, they silently degrade the keyswitched noise. Only the
    /// structural constraints are validated here.
    pub fn generate_new_lwe_keyswitch_key<InputKeyCont, OutputKeyCont>(
        &mut self,
        input_lwe_sk: &LweSecretKey<InputKeyCont>,
        output_lwe_sk: &LweSecretKey<OutputKeyCont>,
        decomp_base_log: DecompositionBaseLog,
        decomp_level_count: DecompositionLevelCount,
        noise_parameters: impl DispersionParameter,
    ) -> Result<LweKeyswitchKeyOwned<u64>, LweError>
    where
        InputKeyCont: Container<Element = u64>,
        OutputKeyCont: Container<Element = u64>,
    {
        if decomp_base_log.0 == 0 {
            return Err(LweError::InvalidParameter(
                "decomp_base_log must be greater than 0",
            ));
        }
        if decomp_level_count.0 == 0 {
            return Err(LweError::InvalidParameter(
                "decomp_level_count must be greater than 0",
            ));
        }
        match decomp_base_log.0.checked_mul(decomp_level_count.0) {
            Some(total_bits) if total_bits <= u64::BITS as usize => {}
            _ => {
                return Err(LweError::InvalidParameter(
                    "decomp_base_log * decomp_level_count must not exceed the 64 bit ciphertext \
                     width",
                ))
            }
        }
        if decomp_base_log.0 >= u64::BITS as usize {
            return Err(LweError::InvalidParameter(
                "decomp_base_log must be strictly smaller than the 64 bit ciphertext width",
            ));
        }
        Ok(self.generate_new_lwe_keyswitch_key_unchecked(
            input_lwe_sk,
            output_lwe_sk,
            decomp_base_log,
            decomp_level_count,
            noise_parameters,
        ))
    }

    /// Unchecked variant of [`LweEngine::generate_new_lwe_keyswitch_key`].
    ///
    /// Performs no parameter validation; a decomposition not fitting the
    /// ciphertext width panics instead of returning an error.
    pub fn generate_new_lwe_keyswitch_key_unchecked<InputKeyCont, OutputKeyCont>(
        &mut self,
        input_lwe_sk: &LweSecretKey<InputKeyCont>,
        output_lwe_sk: &LweSecretKey<OutputKeyCont>,
        decomp_base_log: DecompositionBaseLog,
        decomp_level_count: DecompositionLevelCount,
        noise_parameters: impl DispersionParameter,
    ) -> LweKeyswitchKeyOwned<u64>
    where
        InputKeyCont: Container<Element = u64>,
        OutputKeyCont: Container<Element = u64>,
    {
        allocate_and_generate_new_lwe_keyswitch_key(
            input_lwe_sk,
            output_lwe_sk,
            decomp_base_log,
            decomp_level_count,
            noise_parameters,
            &mut self.encryption_generator,
        )
    }

    /// Keyswitch an input [`LweCiphertext`] to the key basis of the given
    /// [`LweKeyswitchKey`], writing the result in the output ciphertext.
    pub fn keyswitch_lwe_ciphertext<KSKCont, InputCont, OutputCont>(
        &self,
        lwe_keyswitch_key: &LweKeyswitchKey<KSKCont>,
        input: &LweCiphertext<InputCont>,
        output: &mut LweCiphertext<OutputCont>,
    ) -> Result<(), LweError>
    where
        KSKCont: Container<Element = u64>,
        InputCont: Container<Element = u64>,
        OutputCont: ContainerMut<Element = u64>,
    {
        let expected_input = lwe_keyswitch_key.input_key_lwe_dimension().to_lwe_size().0;
        let found_input = input.lwe_size().0;
        if expected_input != found_input {
            return Err(LweError::SizeMismatch {
                expected: expected_input,
                found: found_input,
            });
        }
        let expected_output = lwe_keyswitch_key.output_lwe_size().0;
        let found_output = output.lwe_size().0;
        if expected_output != found_output {
            return Err(LweError::SizeMismatch {
                expected: expected_output,
                found: found_output,
            });
        }
        self.keyswitch_lwe_ciphertext_unchecked(lwe_keyswitch_key, input, output);
        Ok(())
    }

    /// Unchecked variant of [`LweEngine::keyswitch_lwe_ciphertext`].
    ///
    /// Performs no size validation; mismatched dimensions panic instead of
    /// returning an error.
    pub fn keyswitch_lwe_ciphertext_unchecked<KSKCont, InputCont, OutputCont>(
        &self,
        lwe_keyswitch_key: &LweKeyswitchKey<KSKCont>,
        input: &LweCiphertext<InputCont>,
        output: &mut LweCiphertext<OutputCont>,
    ) where
        KSKCont: Container<Element = u64>,
        InputCont: Container<Element = u64>,
        OutputCont: ContainerMut<Element = u64>,
    {
        keyswitch_lwe_ciphertext(lwe_keyswitch_key, input, output);
    }

    /// Raw-slice variant of [`LweEngine::keyswitch_lwe_ciphertext`].
    pub fn keyswitch_lwe_ciphertext_raw<KSKCont>(
        &self,
        lwe_keyswitch_key: &LweKeyswitchKey<KSKCont>,
        input: &[u64],
        output: &mut [u64],
    ) -> Result<(), LweError>
    where
        KSKCont: Container<Element = u64>,
    {
        let expected_input = lwe_keyswitch_key.input_key_lwe_dimension().to_lwe_size().0;
        if expected_input != input.len() {
            return Err(LweError::SizeMismatch {
                expected: expected_input,
                found: input.len(),
            });
        }
        let expected_output = lwe_keyswitch_key.output_lwe_size().0;
        if expected_output != output.len() {
            return Err(LweError::SizeMismatch {
                expected: expected_output,
                found: output.len(),
            });
        }
        let input_view = LweCiphertextView::from_container(input);
        let mut output_view = LweCiphertextMutView::from_container(output);
        self.keyswitch_lwe_ciphertext_unchecked(lwe_keyswitch_key, &input_view, &mut output_view);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithms::{decode_plaintext, encode_plaintext};
    use crate::commons::dispersion::Variance;
    use crate::commons::math::random::Seed;
    use crate::commons::parameters::LweSize;
    use crate::entities::LweCiphertextOwned;

    fn deterministic_engine(seed: u128) -> LweEngine {
        LweEngine::with_seeder(Box::new(DeterministicSeeder::<DefaultRandomGenerator>::new(
            Seed(seed),
        )))
    }

    #[test]
    fn engine_round_trip_with_reference_parameters() {
        let mut engine = deterministic_engine(0);

        let input_lwe_dimension = LweDimension(2);
        let output_lwe_dimension = LweDimension(2);
        let decomp_base_log = DecompositionBaseLog(10);
        let decomp_level_count = DecompositionLevelCount(5);

        let input_key = engine.generate_new_lwe_secret_key(input_lwe_dimension).unwrap();
        let output_key = engine
            .generate_new_lwe_secret_key(output_lwe_dimension)
            .unwrap();

        let ksk = engine
            .generate_new_lwe_keyswitch_key(
                &input_key,
                &output_key,
                decomp_base_log,
                decomp_level_count,
                Variance(1e-18),
            )
            .unwrap();

        let encoding_shift = 59;
        let encoded = Plaintext(1u64 << encoding_shift);

        let mut input_ct = LweCiphertextOwned::new(0u64, input_lwe_dimension.to_lwe_size());
        engine
            .encrypt_lwe_ciphertext(&input_key, &mut input_ct, encoded, Variance(1e-9))
            .unwrap();

        let mut output_ct = LweCiphertextOwned::new(0u64, output_lwe_dimension.to_lwe_size());
        engine
            .keyswitch_lwe_ciphertext(&ksk, &input_ct, &mut output_ct)
            .unwrap();

        let decrypted = engine
            .decrypt_lwe_ciphertext(&output_key, &output_ct)
            .unwrap();

        // Signed relative error of the raw decryption against the encoded value
        let error = decrypted.0.wrapping_sub(encoded.0) as i64;
        let relative_error = error.unsigned_abs() as f64 / encoded.0 as f64;
        assert!(
            relative_error < 0.01,
            "relative error too large: {relative_error}"
        );

        // The decoded message survives the whole pipeline exactly
        assert_eq!(decode_plaintext(decrypted, encoding_shift), 1);
    }

    #[test]
    fn checked_and_unchecked_surfaces_agree_on_valid_input() {
        let mut checked = deterministic_engine(7);
        let mut unchecked = deterministic_engine(7);

        let lwe_dimension = LweDimension(128);
        let key_checked = checked.generate_new_lwe_secret_key(lwe_dimension).unwrap();
        let key_unchecked = unchecked.generate_new_lwe_secret_key_unchecked(lwe_dimension);
        assert_eq!(key_checked, key_unchecked);

        let encoded = encode_plaintext(5u64, 60);
        let mut ct_checked = LweCiphertextOwned::new(0u64, lwe_dimension.to_lwe_size());
        let mut ct_unchecked = LweCiphertextOwned::new(0u64, lwe_dimension.to_lwe_size());

        checked
            .encrypt_lwe_ciphertext(&key_checked, &mut ct_checked, encoded, Variance(1e-20))
            .unwrap();
        unchecked.encrypt_lwe_ciphertext_unchecked(
            &key_unchecked,
            &mut ct_unchecked,
            encoded,
            Variance(1e-20),
        );

        assert_eq!(ct_checked, ct_unchecked);
        assert_eq!(
            checked
                .decrypt_lwe_ciphertext(&key_checked, &ct_checked)
                .unwrap(),
            unchecked.decrypt_lwe_ciphertext_unchecked(&key_unchecked, &ct_unchecked)
        );
    }

    #[test]
    fn view_and_raw_paths_are_bit_identical() {
        let mut view_engine = deterministic_engine(21);
        let mut raw_engine = deterministic_engine(21);

        let lwe_dimension = LweDimension(64);
        let view_key = view_engine.generate_new_lwe_secret_key(lwe_dimension).unwrap();
        let raw_key = raw_engine.generate_new_lwe_secret_key(lwe_dimension).unwrap();

        let encoded = encode_plaintext(9u64, 58);

        let mut view_ct = LweCiphertextOwned::new(0u64, lwe_dimension.to_lwe_size());
        view_engine
            .encrypt_lwe_ciphertext(&view_key, &mut view_ct, encoded, Variance(1e-20))
            .unwrap();

        let mut raw_ct = vec![0u64; lwe_dimension.to_lwe_size().0];
        raw_engine
            .encrypt_lwe_ciphertext_raw(&raw_key, &mut raw_ct, encoded, Variance(1e-20))
            .unwrap();

        assert_eq!(view_ct.as_ref(), raw_ct.as_slice());
        assert_eq!(
            view_engine
                .decrypt_lwe_ciphertext(&view_key, &view_ct)
                .unwrap(),
            raw_engine
                .decrypt_lwe_ciphertext_raw(&raw_key, &raw_ct)
                .unwrap()
        );
    }

    #[test]
    fn raw_keyswitch_matches_view_keyswitch() {
        let mut engine = deterministic_engine(33);

        let input_key = engine.generate_new_lwe_secret_key(LweDimension(16)).unwrap();
        let output_key = engine.generate_new_lwe_secret_key(LweDimension(32)).unwrap();
        let ksk = engine
            .generate_new_lwe_keyswitch_key(
                &input_key,
                &output_key,
                DecompositionBaseLog(8),
                DecompositionLevelCount(4),
                Variance(1e-20),
            )
            .unwrap();

        let mut input_ct = LweCiphertextOwned::new(0u64, LweDimension(16).to_lwe_size());
        engine
            .encrypt_lwe_ciphertext(
                &input_key,
                &mut input_ct,
                encode_plaintext(2u64, 60),
                Variance(1e-20),
            )
            .unwrap();

        let mut view_output = LweCiphertextOwned::new(0u64, LweDimension(32).to_lwe_size());
        engine
            .keyswitch_lwe_ciphertext(&ksk, &input_ct, &mut view_output)
            .unwrap();

        let mut raw_output = vec![0u64; LweDimension(32).to_lwe_size().0];
        engine
            .keyswitch_lwe_ciphertext_raw(&ksk, input_ct.as_ref(), &mut raw_output)
            .unwrap();

        assert_eq!(view_output.as_ref(), raw_output.as_slice());
    }

    #[test]
    fn zero_dimension_key_generation_is_rejected() {
        let mut engine = deterministic_engine(1);
        assert_eq!(
            engine.generate_new_lwe_secret_key(LweDimension(0)),
            Err(LweError::InvalidParameter(
                "lwe_dimension must be greater than 0"
            ))
        );
    }

    #[test]
    fn invalid_decomposition_parameters_are_rejected() {
        let mut engine = deterministic_engine(2);
        let input_key = engine.generate_new_lwe_secret_key(LweDimension(4)).unwrap();
        let output_key = engine.generate_new_lwe_secret_key(LweDimension(4)).unwrap();

        for (base_log, level_count) in [(0, 3), (3, 0), (13, 5), (64, 1), (3, usize::MAX / 2)] {
            let result = engine.generate_new_lwe_keyswitch_key(
                &input_key,
                &output_key,
                DecompositionBaseLog(base_log),
                DecompositionLevelCount(level_count),
                Variance(1e-20),
            );
            assert!(
                matches!(result, Err(LweError::InvalidParameter(_))),
                "base_log {base_log} level_count {level_count} was not rejected"
            );
        }

        // The full width decomposition is valid
        assert!(engine
            .generate_new_lwe_keyswitch_key(
                &input_key,
                &output_key,
                DecompositionBaseLog(16),
                DecompositionLevelCount(4),
                Variance(1e-20),
            )
            .is_ok());
    }

    #[test]
    fn mismatched_buffer_lengths_are_rejected() {
        let mut engine = deterministic_engine(3);
        let key = engine.generate_new_lwe_secret_key(LweDimension(8)).unwrap();
        let encoded = Plaintext(0u64);

        for bad_len in [8, 10] {
            let mut too_wrong = vec![0u64; bad_len];
            assert_eq!(
                engine.encrypt_lwe_ciphertext_raw(&key, &mut too_wrong, encoded, Variance(1e-20)),
                Err(LweError::SizeMismatch {
                    expected: 9,
                    found: bad_len
                })
            );
            assert_eq!(
                engine.decrypt_lwe_ciphertext_raw(&key, &too_wrong),
                Err(LweError::SizeMismatch {
                    expected: 9,
                    found: bad_len
                })
            );
        }
    }

    #[test]
    fn keyswitch_with_mismatched_buffer_lengths_is_rejected() {
        let mut engine = deterministic_engine(5);
        let input_key = engine.generate_new_lwe_secret_key(LweDimension(8)).unwrap();
        let output_key = engine.generate_new_lwe_secret_key(LweDimension(4)).unwrap();
        let ksk = engine
            .generate_new_lwe_keyswitch_key(
                &input_key,
                &output_key,
                DecompositionBaseLog(4),
                DecompositionLevelCount(3),
                Variance(1e-20),
            )
            .unwrap();

        // The key switches 9 coefficient ciphertexts to 5 coefficient ones
        for bad_input_len in [8, 10] {
            let input = LweCiphertextOwned::new(0u64, LweSize(bad_input_len));
            let mut output = LweCiphertextOwned::new(0u64, LweSize(5));
            assert_eq!(
                engine.keyswitch_lwe_ciphertext(&ksk, &input, &mut output),
                Err(LweError::SizeMismatch {
                    expected: 9,
                    found: bad_input_len
                })
            );
            let raw_input = vec![0u64; bad_input_len];
            let mut raw_output = vec![0u64; 5];
            assert_eq!(
                engine.keyswitch_lwe_ciphertext_raw(&ksk, &raw_input, &mut raw_output),
                Err(LweError::SizeMismatch {
                    expected: 9,
                    found: bad_input_len
                })
            );
        }

        for bad_output_len in [4, 6] {
            let input = LweCiphertextOwned::new(0u64, LweSize(9));
            let mut output = LweCiphertextOwned::new(0u64, LweSize(bad_output_len));
            assert_eq!(
                engine.keyswitch_lwe_ciphertext(&ksk, &input, &mut output),
                Err(LweError::SizeMismatch {
                    expected: 5,
                    found: bad_output_len
                })
            );
            let raw_input = vec![0u64; 9];
            let mut raw_output = vec![0u64; bad_output_len];
            assert_eq!(
                engine.keyswitch_lwe_ciphertext_raw(&ksk, &raw_input, &mut raw_output),
                Err(LweError::SizeMismatch {
                    expected: 5,
                    found: bad_output_len
                })
            );
        }
    }
}
