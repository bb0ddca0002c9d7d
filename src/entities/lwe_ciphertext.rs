//! Module containing the definition of the LweCiphertext.

use crate::commons::parameters::{LweDimension, LweSize};
use crate::commons::traits::{Container, ContainerMut};

/// The mask of an LWE ciphertext, i.e. its uniformly random part.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LweMask<C: Container> {
    data: C,
}

impl<Scalar, C: Container<Element = Scalar>> LweMask<C> {
    /// Create an [`LweMask`] from an existing container.
    pub fn from_container(container: C) -> Self {
        Self { data: container }
    }

    /// Return the [`LweDimension`] of the [`LweMask`].
    pub fn lwe_dimension(&self) -> LweDimension {
        LweDimension(self.data.container_len())
    }
}

impl<T, C: Container<Element = T>> AsRef<[T]> for LweMask<C> {
    fn as_ref(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<T, C: ContainerMut<Element = T>> AsMut<[T]> for LweMask<C> {
    fn as_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

/// An LWE ciphertext.
///
/// The ciphertext stores its mask coefficients followed by its body in a
/// single flat container of [`LweSize`] elements, so the body is always the
/// last element.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LweCiphertext<C: Container> {
    data: C,
}

impl<T, C: Container<Element = T>> AsRef<[T]> for LweCiphertext<C> {
    fn as_ref(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<T, C: ContainerMut<Element = T>> AsMut<[T]> for LweCiphertext<C> {
    fn as_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<Scalar, C: Container<Element = Scalar>> LweCiphertext<C> {
    /// Create an [`LweCiphertext`] from an existing container.
    ///
    /// This function only wraps a container in the appropriate type. To
    /// encrypt data in the wrapped container use
    /// [`encrypt_lwe_ciphertext`](`crate::algorithms::encrypt_lwe_ciphertext`).
    pub fn from_container(container: C) -> Self {
        assert!(
            container.container_len() > 0,
            "Got an empty container to create an LweCiphertext"
        );
        Self { data: container }
    }

    /// Return the [`LweSize`] of the [`LweCiphertext`].
    pub fn lwe_size(&self) -> LweSize {
        LweSize(self.data.container_len())
    }

    /// Return immutable views to the [`LweMask`] and the body of the
    /// [`LweCiphertext`].
    pub fn get_mask_and_body(&self) -> (LweMask<&[Scalar]>, &Scalar) {
        // An LweCiphertext is never empty
        let (body, mask) = self.data.as_ref().split_last().unwrap();
        (LweMask::from_container(mask), body)
    }

    /// Return an immutable view to the [`LweMask`] of the [`LweCiphertext`].
    pub fn get_mask(&self) -> LweMask<&[Scalar]> {
        self.get_mask_and_body().0
    }

    /// Return an immutable reference to the body of the [`LweCiphertext`].
    pub fn get_body(&self) -> &Scalar {
        self.get_mask_and_body().1
    }

    /// Return a view of the [`LweCiphertext`]. This is useful if an algorithm
    /// takes a view by value.
    pub fn as_view(&self) -> LweCiphertextView<'_, Scalar> {
        LweCiphertext::from_container(self.as_ref())
    }

    /// Consume the entity and return its underlying container.
    pub fn into_container(self) -> C {
        self.data
    }
}

impl<Scalar, C: ContainerMut<Element = Scalar>> LweCiphertext<C> {
    /// Mutable variant of [`LweCiphertext::get_mask_and_body`].
    pub fn get_mut_mask_and_body(&mut self) -> (LweMask<&mut [Scalar]>, &mut Scalar) {
        // An LweCiphertext is never empty
        let (body, mask) = self.data.as_mut().split_last_mut().unwrap();
        (LweMask::from_container(mask), body)
    }

    /// Mutable variant of [`LweCiphertext::get_mask`].
    pub fn get_mut_mask(&mut self) -> LweMask<&mut [Scalar]> {
        self.get_mut_mask_and_body().0
    }

    /// Mutable variant of [`LweCiphertext::get_body`].
    pub fn get_mut_body(&mut self) -> &mut Scalar {
        self.get_mut_mask_and_body().1
    }

    /// Mutable variant of [`LweCiphertext::as_view`].
    pub fn as_mut_view(&mut self) -> LweCiphertextMutView<'_, Scalar> {
        LweCiphertext::from_container(self.as_mut())
    }
}

/// An [`LweCiphertext`] owning the memory for its own storage.
pub type LweCiphertextOwned<Scalar> = LweCiphertext<Vec<Scalar>>;
/// An [`LweCiphertext`] immutably borrowing memory for its own storage.
pub type LweCiphertextView<'data, Scalar> = LweCiphertext<&'data [Scalar]>;
/// An [`LweCiphertext`] mutably borrowing memory for its own storage.
pub type LweCiphertextMutView<'data, Scalar> = LweCiphertext<&'data mut [Scalar]>;

impl<Scalar: Copy> LweCiphertextOwned<Scalar> {
    /// Allocate memory and create a new owned [`LweCiphertext`] filled with
    /// `fill_with`.
    pub fn new(fill_with: Scalar, lwe_size: LweSize) -> Self {
        Self::from_container(vec![fill_with; lwe_size.0])
    }
}
