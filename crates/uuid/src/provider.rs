//! Random bytes and canonical string encoding for [`Uuid`](crate::Uuid).
//!
//! The value type delegates both generation and formatting to a [`UuidProvider`]. The default
//! [`SystemProvider`] draws from the operating system RNG; [`SeededProvider`] produces a
//! reproducible sequence from a `u64` seed.

use crate::{UuidError, UuidResult};
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Supplies random version-4 bytes and the canonical string encoding.
pub trait UuidProvider {
    /// Fills `buf` with random bytes carrying the v4 version nibble and RFC 4122 variant bits.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::RandomSourceUnavailable`] if no entropy could be obtained. On error
    /// the contents of `buf` are unspecified; callers must not use them.
    fn fill_random_v4(&mut self, buf: &mut [u8; 16]) -> UuidResult<()>;

    /// Renders `bytes` as the 36-character lowercase hyphenated form.
    fn format(&self, bytes: &[u8; 16]) -> String {
        ::uuid::Uuid::from_bytes(*bytes).hyphenated().to_string()
    }
}

/// Overwrites the version nibble (byte 6) with `4` and the variant bits (byte 8) with `10`.
///
/// All other bits are left as supplied.
pub fn apply_v4_bits(bytes: &mut [u8; 16]) {
    *bytes = ::uuid::Builder::from_random_bytes(*bytes)
        .into_uuid()
        .into_bytes();
}

/// Provider backed by the operating system's cryptographically secure RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProvider;

impl UuidProvider for SystemProvider {
    fn fill_random_v4(&mut self, buf: &mut [u8; 16]) -> UuidResult<()> {
        OsRng.try_fill_bytes(buf).map_err(|e| {
            tracing::warn!("operating system RNG failed: {}", e);
            UuidError::RandomSourceUnavailable(e.to_string())
        })?;
        apply_v4_bits(buf);
        Ok(())
    }
}

/// Deterministic provider seeded from a `u64`.
///
/// Two providers built from the same seed yield the same sequence of UUIDs. Not suitable for
/// identifiers that must be unpredictable.
#[derive(Clone, Debug)]
pub struct SeededProvider {
    rng: StdRng,
}

impl SeededProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UuidProvider for SeededProvider {
    fn fill_random_v4(&mut self, buf: &mut [u8; 16]) -> UuidResult<()> {
        self.rng.fill_bytes(buf);
        apply_v4_bits(buf);
        Ok(())
    }
}
