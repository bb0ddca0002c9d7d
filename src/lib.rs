//! Low-level cryptographic primitives for LWE ciphertexts over 64 bit unsigned
//! integers: secret key generation, encryption, decryption and key switching,
//! plus a deterministic binary serialization format for key switching keys.
//!
//! The crate is split in three layers:
//!
//! - [`entities`]: the cryptographic objects (secret keys, ciphertexts, key
//!   switching keys), generic over their backing container so that owned
//!   values and borrowed views share one implementation;
//! - [`algorithms`]: free functions implementing the cryptographic operations
//!   over those entities;
//! - [`engine`]: a stateful facade binding an entropy source at construction
//!   and exposing checked ([`Result`]) and unchecked entry points over the
//!   algorithms.

pub mod algorithms;
pub mod commons;
pub mod engine;
pub mod entities;
pub mod prelude;
pub mod seeders;
