//! This module contains methods to get a random seed.
//!
//! Seeding depends on the underlying OS/hardware. The available strategies
//! are split in two trust tiers: the secure tier only accepts hardware-backed
//! entropy sources, the best-effort tier falls back to whatever the OS
//! provides.

pub use crate::commons::math::random::{Seed, Seeder};
#[cfg(target_os = "macos")]
pub use tfhe_csprng::seeders::AppleSecureEnclaveSeeder;
#[cfg(target_arch = "x86_64")]
pub use tfhe_csprng::seeders::RdseedSeeder;
#[cfg(target_family = "unix")]
pub use tfhe_csprng::seeders::UnixSeeder;

/// The trust tier requested for an entropy source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntropyTier {
    /// Hardware-backed entropy only: rdseed on `x86_64` CPUs supporting it,
    /// Apple's randomization service on macOS.
    Secure,
    /// A secure source when one is available, otherwise OS-provided
    /// randomness (`/dev/random` on Unix platforms).
    BestEffort,
}

fn new_secure_seeder() -> Option<Box<dyn Seeder>> {
    let mut seeder: Option<Box<dyn Seeder>> = None;

    #[cfg(target_arch = "x86_64")]
    {
        if RdseedSeeder::is_available() {
            seeder = Some(Box::new(RdseedSeeder::new()));
        }
    }

    // This seeder is normally always available on macOS, so we enable it by
    // default when on that platform
    #[cfg(target_os = "macos")]
    {
        if seeder.is_none() && AppleSecureEnclaveSeeder::is_available() {
            seeder = Some(Box::new(AppleSecureEnclaveSeeder));
        }
    }

    seeder
}

/// Return an available boxed [`Seeder`] for the requested [`EntropyTier`], or
/// `None` if the current machine has no compatible entropy source.
///
/// Within a tier, hardware entropy sources are prioritized over OS-provided
/// ones.
pub fn new_seeder(tier: EntropyTier) -> Option<Box<dyn Seeder>> {
    let mut seeder = new_secure_seeder();

    if tier == EntropyTier::BestEffort {
        #[cfg(target_family = "unix")]
        {
            if seeder.is_none() && UnixSeeder::is_available() {
                seeder = Some(Box::new(UnixSeeder::new(0)));
            }
        }
    }

    seeder
}
