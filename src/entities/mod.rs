//! Module containing the definitions of the crate entities.

mod lwe_ciphertext;
mod lwe_keyswitch_key;
mod lwe_secret_key;
mod plaintext;

pub use lwe_ciphertext::*;
pub use lwe_keyswitch_key::*;
pub use lwe_secret_key::*;
pub use plaintext::*;
