//! Module containing the specialized random generators used for secret key
//! generation and encryption.

mod encryption;
pub use encryption::EncryptionRandomGenerator;

mod secret;
pub use secret::SecretRandomGenerator;

mod seeder;
pub use seeder::DeterministicSeeder;
