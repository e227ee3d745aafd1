//! Version-4 (random) UUID value type.
//!
//! A [`Uuid`] is stored as **16 raw bytes** in RFC 4122 byte order: the order in which the bytes
//! appear when the canonical string is read left to right, ignoring dashes. Nothing is ever
//! reinterpreted as integers or words.
//!
//! This crate provides:
//! - The [`Uuid`] value type (construction, parsing, formatting, generation, ordering).
//! - The [`UuidProvider`] trait, which supplies random v4 bytes and the canonical string
//!   encoding, so the value type itself carries no platform dependency.
//! - [`SystemProvider`] (operating system RNG) and [`SeededProvider`] (reproducible sequences).
//!
//! ## Canonical string form
//! - Length: 36
//! - Layout: `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` (dashes at indices 8, 13, 18 and 23)
//! - Characters: `0-9` and `a-f` only, plus the four dashes
//! - Example: `550e8400-e29b-41d4-a716-446655440000`
//!
//! Notes:
//! - Parsing is strict. Uppercase hex, braces, URNs and the 32-character "simple" form are
//!   rejected with [`UuidError::MalformedUuidString`].
//! - A failed parse or a failed generation never modifies the existing value.
//!
//! ## Version and variant bits
//! UUIDs produced by [`Uuid::generate`] have the high nibble of byte 6 set to `4` and the two
//! high bits of byte 8 set to `10`. These bits are written by the provider; [`Uuid`] stores
//! whatever the provider hands back.

mod provider;
mod value;

// Re-export public types
pub use provider::{apply_v4_bits, SeededProvider, SystemProvider, UuidProvider};
pub use value::{Uuid, CANONICAL_LEN, DASH_POSITIONS, UUID_LEN};

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Input string is not a canonical lowercase hyphenated UUID
    #[error("Malformed UUID string: {0}")]
    MalformedUuidString(String),
    /// The random source could not supply bytes
    #[error("Random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
