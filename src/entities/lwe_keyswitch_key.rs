//! Module containing the definition of the LweKeyswitchKey.

use crate::commons::parameters::{
    DecompositionBaseLog, DecompositionLevelCount, LweDimension, LweSize,
};
use crate::commons::traits::{Container, ContainerMut};

/// Return the number of elements in an encryption of an input key element for
/// a keyswitch key with the given parameters.
pub fn lwe_keyswitch_key_input_key_element_encrypted_size(
    decomp_level_count: DecompositionLevelCount,
    output_lwe_size: LweSize,
) -> usize {
    // One ciphertext per level encrypts one decomposition of an input key element
    decomp_level_count.0 * output_lwe_size.0
}

/// An LWE keyswitch key.
///
/// The key stores, for each input key element, one LWE ciphertext per
/// decomposition level. The ciphertext for level $l$ encrypts the input key
/// element scaled by $2^{w - l \log_2(B)}$, with $w$ the bit width of the
/// ciphertext modulus. Ciphertexts are laid out contiguously, input key
/// element by input key element, in increasing level number within each block
/// (level $1$ first, level $\ell$ last).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LweKeyswitchKey<C: Container> {
    data: C,
    decomp_base_log: DecompositionBaseLog,
    decomp_level_count: DecompositionLevelCount,
    output_lwe_size: LweSize,
}

impl<T, C: Container<Element = T>> AsRef<[T]> for LweKeyswitchKey<C> {
    fn as_ref(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<T, C: ContainerMut<Element = T>> AsMut<[T]> for LweKeyswitchKey<C> {
    fn as_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<Scalar, C: Container<Element = Scalar>> LweKeyswitchKey<C> {
    /// Create an [`LweKeyswitchKey`] from an existing container.
    ///
    /// This function only wraps a container in the appropriate type. To
    /// generate actual key material use
    /// [`generate_lwe_keyswitch_key`](`crate::algorithms::generate_lwe_keyswitch_key`).
    pub fn from_container(
        container: C,
        decomp_base_log: DecompositionBaseLog,
        decomp_level_count: DecompositionLevelCount,
        output_lwe_size: LweSize,
    ) -> Self {
        assert!(
            container.container_len() > 0,
            "Got an empty container to create an LweKeyswitchKey"
        );
        assert!(
            container.container_len()
                % lwe_keyswitch_key_input_key_element_encrypted_size(
                    decomp_level_count,
                    output_lwe_size
                )
                == 0,
            "The provided container length is not valid. \
        It needs to be dividable by decomp_level_count * output_lwe_size: {}. \
        Got container length: {} and decomp_level_count: {decomp_level_count:?}, \
        output_lwe_size: {output_lwe_size:?}.",
            decomp_level_count.0 * output_lwe_size.0,
            container.container_len()
        );

        Self {
            data: container,
            decomp_base_log,
            decomp_level_count,
            output_lwe_size,
        }
    }

    /// Return the [`DecompositionBaseLog`] of the [`LweKeyswitchKey`].
    pub fn decomposition_base_log(&self) -> DecompositionBaseLog {
        self.decomp_base_log
    }

    /// Return the [`DecompositionLevelCount`] of the [`LweKeyswitchKey`].
    pub fn decomposition_level_count(&self) -> DecompositionLevelCount {
        self.decomp_level_count
    }

    /// Return the [`LweDimension`] of the input [`LweSecretKey`] of the
    /// [`LweKeyswitchKey`].
    ///
    /// [`LweSecretKey`]: `crate::entities::LweSecretKey`
    pub fn input_key_lwe_dimension(&self) -> LweDimension {
        LweDimension(self.data.container_len() / self.input_key_element_encrypted_size())
    }

    /// Return the [`LweDimension`] of the output [`LweSecretKey`] of the
    /// [`LweKeyswitchKey`].
    ///
    /// [`LweSecretKey`]: `crate::entities::LweSecretKey`
    pub fn output_key_lwe_dimension(&self) -> LweDimension {
        self.output_lwe_size.to_lwe_dimension()
    }

    /// Return the output [`LweSize`] of the [`LweKeyswitchKey`].
    pub fn output_lwe_size(&self) -> LweSize {
        self.output_lwe_size
    }

    /// Return the number of elements in an encryption of an input
    /// [`LweSecretKey`](`crate::entities::LweSecretKey`) element of the
    /// current [`LweKeyswitchKey`].
    pub fn input_key_element_encrypted_size(&self) -> usize {
        lwe_keyswitch_key_input_key_element_encrypted_size(
            self.decomp_level_count,
            self.output_lwe_size,
        )
    }

    /// Return a view of the [`LweKeyswitchKey`]. This is useful if an
    /// algorithm takes a view by value.
    pub fn as_view(&self) -> LweKeyswitchKeyView<'_, Scalar> {
        LweKeyswitchKey {
            data: self.data.as_ref(),
            decomp_base_log: self.decomp_base_log,
            decomp_level_count: self.decomp_level_count,
            output_lwe_size: self.output_lwe_size,
        }
    }

    /// Consume the entity and return its underlying container.
    pub fn into_container(self) -> C {
        self.data
    }
}

impl<Scalar, C: ContainerMut<Element = Scalar>> LweKeyswitchKey<C> {
    /// Mutable variant of [`LweKeyswitchKey::as_view`].
    pub fn as_mut_view(&mut self) -> LweKeyswitchKeyMutView<'_, Scalar> {
        let decomp_base_log = self.decomp_base_log;
        let decomp_level_count = self.decomp_level_count;
        let output_lwe_size = self.output_lwe_size;
        LweKeyswitchKey {
            data: self.data.as_mut(),
            decomp_base_log,
            decomp_level_count,
            output_lwe_size,
        }
    }
}

/// An [`LweKeyswitchKey`] owning the memory for its own storage.
pub type LweKeyswitchKeyOwned<Scalar> = LweKeyswitchKey<Vec<Scalar>>;
/// An [`LweKeyswitchKey`] immutably borrowing memory for its own storage.
pub type LweKeyswitchKeyView<'data, Scalar> = LweKeyswitchKey<&'data [Scalar]>;
/// An [`LweKeyswitchKey`] mutably borrowing memory for its own storage.
pub type LweKeyswitchKeyMutView<'data, Scalar> = LweKeyswitchKey<&'data mut [Scalar]>;

impl<Scalar: Copy> LweKeyswitchKeyOwned<Scalar> {
    /// Allocate memory and create a new owned [`LweKeyswitchKey`] filled with
    /// `fill_with`.
    pub fn new(
        fill_with: Scalar,
        decomp_base_log: DecompositionBaseLog,
        decomp_level_count: DecompositionLevelCount,
        input_key_lwe_dimension: LweDimension,
        output_key_lwe_dimension: LweDimension,
    ) -> Self {
        Self::from_container(
            vec![
                fill_with;
                input_key_lwe_dimension.0
                    * lwe_keyswitch_key_input_key_element_encrypted_size(
                        decomp_level_count,
                        output_key_lwe_dimension.to_lwe_size()
                    )
            ],
            decomp_base_log,
            decomp_level_count,
            output_key_lwe_dimension.to_lwe_size(),
        )
    }
}
