//! Module containing the definition of the LweSecretKey.

use crate::commons::parameters::LweDimension;
use crate::commons::traits::{Container, ContainerMut};

/// An LWE secret key.
///
/// The key holds one integer coefficient per LWE dimension. Coefficients are
/// sampled from the uniform binary distribution by
/// [`generate_binary_lwe_secret_key`](`crate::algorithms::generate_binary_lwe_secret_key`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LweSecretKey<C: Container> {
    data: C,
}

impl<T, C: Container<Element = T>> AsRef<[T]> for LweSecretKey<C> {
    fn as_ref(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<T, C: ContainerMut<Element = T>> AsMut<[T]> for LweSecretKey<C> {
    fn as_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<Scalar, C: Container<Element = Scalar>> LweSecretKey<C> {
    /// Create an [`LweSecretKey`] from an existing container.
    ///
    /// This function only wraps a container in the appropriate type. To
    /// generate a fresh key use
    /// [`allocate_and_generate_new_binary_lwe_secret_key`](`crate::algorithms::allocate_and_generate_new_binary_lwe_secret_key`).
    pub fn from_container(container: C) -> Self {
        assert!(
            container.container_len() > 0,
            "Got an empty container to create an LweSecretKey"
        );
        Self { data: container }
    }

    /// Return the [`LweDimension`] of the [`LweSecretKey`].
    pub fn lwe_dimension(&self) -> LweDimension {
        LweDimension(self.data.container_len())
    }

    /// Return a view of the [`LweSecretKey`]. This is useful if an algorithm
    /// takes a view by value.
    pub fn as_view(&self) -> LweSecretKeyView<'_, Scalar> {
        LweSecretKey::from_container(self.as_ref())
    }

    /// Consume the entity and return its underlying container.
    pub fn into_container(self) -> C {
        self.data
    }
}

impl<Scalar, C: ContainerMut<Element = Scalar>> LweSecretKey<C> {
    /// Mutable variant of [`LweSecretKey::as_view`].
    pub fn as_mut_view(&mut self) -> LweSecretKeyMutView<'_, Scalar> {
        LweSecretKey::from_container(self.as_mut())
    }
}

/// An [`LweSecretKey`] owning the memory for its own storage.
pub type LweSecretKeyOwned<Scalar> = LweSecretKey<Vec<Scalar>>;
/// An [`LweSecretKey`] immutably borrowing memory for its own storage.
pub type LweSecretKeyView<'data, Scalar> = LweSecretKey<&'data [Scalar]>;
/// An [`LweSecretKey`] mutably borrowing memory for its own storage.
pub type LweSecretKeyMutView<'data, Scalar> = LweSecretKey<&'data mut [Scalar]>;

impl<Scalar: Copy> LweSecretKeyOwned<Scalar> {
    /// Allocate memory and create a new owned [`LweSecretKey`] filled with
    /// `fill_with`.
    ///
    /// This function allocates a vector of the appropriate size and wraps it
    /// in the appropriate type. The key coefficients are left as is, use
    /// [`generate_binary_lwe_secret_key`](`crate::algorithms::generate_binary_lwe_secret_key`)
    /// to sample actual key material.
    pub fn new_empty_key(fill_with: Scalar, lwe_dimension: LweDimension) -> Self {
        Self::from_container(vec![fill_with; lwe_dimension.0])
    }
}
