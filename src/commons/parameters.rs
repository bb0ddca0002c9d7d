//! Module with new-types wrapping basic rust types, giving them a particular
//! meaning, to avoid common mistakes when passing parameters to functions.

use serde::{Deserialize, Serialize};

/// The number of scalars in an LWE mask, or the length of an LWE secret key.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LweDimension(pub usize);

impl LweDimension {
    /// Return the [`LweSize`] associated to the current [`LweDimension`].
    pub fn to_lwe_size(&self) -> LweSize {
        LweSize(self.0 + 1)
    }
}

/// The number of scalars in an LWE ciphertext, i.e. the number of scalars in
/// the LWE mask plus one body.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LweSize(pub usize);

impl LweSize {
    /// Return the [`LweDimension`] associated to the current [`LweSize`].
    pub fn to_lwe_dimension(&self) -> LweDimension {
        LweDimension(self.0 - 1)
    }
}

/// The logarithm of the base used in a decomposition.
///
/// When decomposing an integer over powers of the `2^B` basis, this type
/// represents the `B` value.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DecompositionBaseLog(pub usize);

/// The number of levels used in a decomposition.
///
/// When decomposing an integer over the `l` largest powers of the basis, this
/// type represents the `l` value.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DecompositionLevelCount(pub usize);

/// The level of a given term in a decomposition.
///
/// When decomposing an integer over the `l` largest powers of the basis, this
/// type represents the level (in `[1, l]`) of the term currently manipulated.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DecompositionLevel(pub usize);
