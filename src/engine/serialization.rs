//! Binary serialization of [`LweKeyswitchKey`] material.
//!
//! The wire format is versionless and self describing: a header of four
//! little-endian `u64` fields (input dimension, output dimension,
//! decomposition level count, decomposition base log) followed by the
//! flattened cell grid, input key element major then level, each cell
//! `output_dimension + 1` little-endian `u64`s. No compression, no checksum.

use crate::commons::parameters::{DecompositionBaseLog, DecompositionLevelCount, LweSize};
use crate::commons::traits::Container;
use crate::engine::{LweEngine, LweError};
use crate::entities::{LweKeyswitchKey, LweKeyswitchKeyOwned};

const HEADER_FIELD_COUNT: usize = 4;
const HEADER_BYTES: usize = HEADER_FIELD_COUNT * core::mem::size_of::<u64>();

impl LweEngine {
    /// Serialize an [`LweKeyswitchKey`] to its binary wire format.
    ///
    /// The encoding is deterministic: serializing equal keys yields equal
    /// buffers.
    pub fn serialize_lwe_keyswitch_key<KSKCont>(
        &self,
        lwe_keyswitch_key: &LweKeyswitchKey<KSKCont>,
    ) -> Result<Vec<u8>, LweError>
    where
        KSKCont: Container<Element = u64>,
    {
        let data = lwe_keyswitch_key.as_ref();
        let total_bytes = HEADER_BYTES + core::mem::size_of_val(data);

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(total_bytes)
            .map_err(|_| LweError::AllocationFailure)?;

        let header = [
            lwe_keyswitch_key.input_key_lwe_dimension().0 as u64,
            lwe_keyswitch_key.output_key_lwe_dimension().0 as u64,
            lwe_keyswitch_key.decomposition_level_count().0 as u64,
            lwe_keyswitch_key.decomposition_base_log().0 as u64,
        ];
        for field in header {
            bytes.extend_from_slice(&field.to_le_bytes());
        }
        for &coefficient in data {
            bytes.extend_from_slice(&coefficient.to_le_bytes());
        }

        Ok(bytes)
    }

    /// Deserialize an [`LweKeyswitchKey`] from its binary wire format,
    /// validating the header and the buffer length.
    pub fn deserialize_lwe_keyswitch_key(
        &self,
        bytes: &[u8],
    ) -> Result<LweKeyswitchKeyOwned<u64>, LweError> {
        if bytes.len() < HEADER_BYTES {
            return Err(LweError::DeserializationError(
                "buffer too short to hold a keyswitch key header",
            ));
        }

        let [input_dimension, output_dimension, level_count, base_log] = read_header(bytes);

        if input_dimension == 0 || output_dimension == 0 {
            return Err(LweError::DeserializationError(
                "header declares a zero key dimension",
            ));
        }
        if level_count == 0 || base_log == 0 {
            return Err(LweError::DeserializationError(
                "header declares zero decomposition parameters",
            ));
        }
        if base_log
            .checked_mul(level_count)
            .map_or(true, |bits| bits > u64::BITS as u64)
        {
            return Err(LweError::DeserializationError(
                "header declares a decomposition exceeding the 64 bit ciphertext width",
            ));
        }
        if base_log >= u64::BITS as u64 {
            return Err(LweError::DeserializationError(
                "header declares a decomposition base as wide as the ciphertext",
            ));
        }

        let to_usize = |field: u64| -> Result<usize, LweError> {
            usize::try_from(field).map_err(|_| {
                LweError::DeserializationError("header field does not fit the address space")
            })
        };
        let input_dimension = to_usize(input_dimension)?;
        let output_dimension = to_usize(output_dimension)?;
        let level_count = to_usize(level_count)?;
        let base_log = to_usize(base_log)?;

        let cell_count = input_dimension
            .checked_mul(level_count)
            .and_then(|count| count.checked_mul(output_dimension + 1))
            .ok_or(LweError::DeserializationError(
                "header declares a cell grid overflowing the address space",
            ))?;
        let expected_len = HEADER_BYTES + cell_count * core::mem::size_of::<u64>();
        if bytes.len() != expected_len {
            return Err(LweError::DeserializationError(
                "buffer length does not match the declared cell grid",
            ));
        }

        let mut data = Vec::new();
        data.try_reserve_exact(cell_count)
            .map_err(|_| LweError::AllocationFailure)?;
        data.extend(
            bytes[HEADER_BYTES..]
                .chunks_exact(core::mem::size_of::<u64>())
                .map(|chunk| u64::from_le_bytes(chunk.try_into().unwrap())),
        );

        Ok(LweKeyswitchKeyOwned::from_container(
            data,
            DecompositionBaseLog(base_log),
            DecompositionLevelCount(level_count),
            LweSize(output_dimension + 1),
        ))
    }

    /// Unchecked variant of [`LweEngine::deserialize_lwe_keyswitch_key`].
    ///
    /// Performs no header validation: a malformed or truncated buffer yields
    /// an unspecified key or a panic. Only use on buffers produced by
    /// [`LweEngine::serialize_lwe_keyswitch_key`] and kept intact since.
    pub fn deserialize_lwe_keyswitch_key_unchecked(
        &self,
        bytes: &[u8],
    ) -> LweKeyswitchKeyOwned<u64> {
        let [_input_dimension, output_dimension, level_count, base_log] = read_header(bytes);

        let data = bytes[HEADER_BYTES..]
            .chunks_exact(core::mem::size_of::<u64>())
            .map(|chunk| u64::from_le_bytes(chunk.try_into().unwrap()))
            .collect::<Vec<_>>();

        LweKeyswitchKeyOwned::from_container(
            data,
            DecompositionBaseLog(base_log as usize),
            DecompositionLevelCount(level_count as usize),
            LweSize(output_dimension as usize + 1),
        )
    }
}

fn read_header(bytes: &[u8]) -> [u64; HEADER_FIELD_COUNT] {
    let mut header = [0u64; HEADER_FIELD_COUNT];
    for (field, chunk) in header
        .iter_mut()
        .zip(bytes[..HEADER_BYTES].chunks_exact(core::mem::size_of::<u64>()))
    {
        *field = u64::from_le_bytes(chunk.try_into().unwrap());
    }
    header
}
