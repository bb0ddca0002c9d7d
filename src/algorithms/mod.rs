//! Module containing the free functions implementing the cryptographic
//! operations on the crate entities.

pub mod lwe_encryption;
pub mod lwe_keyswitch;
pub mod lwe_keyswitch_key_generation;
pub mod lwe_secret_key_generation;
pub mod slice_algorithms;

pub use lwe_encryption::*;
pub use lwe_keyswitch::*;
pub use lwe_keyswitch_key_generation::*;
pub use lwe_secret_key_generation::*;
pub use slice_algorithms::*;
