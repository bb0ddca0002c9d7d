//! Module containing the definition of the Plaintext.

use crate::commons::numeric::Numeric;

/// A plaintext, i.e. an encoded message ready to be encrypted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Plaintext<T: Numeric>(pub T);
