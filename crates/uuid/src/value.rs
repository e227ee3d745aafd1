//! The [`Uuid`] value type.

use crate::provider::{SystemProvider, UuidProvider};
use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Number of bytes in a UUID.
pub const UUID_LEN: usize = 16;

/// Number of characters in the canonical hyphenated string.
pub const CANONICAL_LEN: usize = 36;

/// Zero-based character indices of the four dashes in the canonical string.
pub const DASH_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// A 128-bit UUID stored as 16 bytes in RFC 4122 order.
///
/// Equality, ordering and hashing are defined over the byte sequence only: ordering is
/// lexicographic with each byte compared as unsigned, so `Uuid` can key a `BTreeMap` or
/// `HashMap` directly.
///
/// # Construction
/// - [`Uuid::new_v4`] generates a fresh random UUID using [`SystemProvider`].
/// - [`Uuid::new_v4_with`] generates using a caller supplied [`UuidProvider`].
/// - [`Uuid::parse`] (or [`str::parse`]) decodes the canonical string form.
/// - [`Uuid::nil`] / [`Default`] give the all-zero UUID.
///
/// # Display format
/// Always the 36-character lowercase form, `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uuid {
    bytes: [u8; UUID_LEN],
}

impl Uuid {
    /// The all-zero UUID.
    pub const fn nil() -> Self {
        Self {
            bytes: [0; UUID_LEN],
        }
    }

    /// Starts from the nil UUID and, if `generate_new` is set, fills it with random v4 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::RandomSourceUnavailable`] if generation was requested and the
    /// operating system RNG failed.
    pub fn create(generate_new: bool) -> UuidResult<Self> {
        let mut uuid = Self::nil();
        if generate_new {
            uuid.generate()?;
        }
        Ok(uuid)
    }

    /// Generates a new random version-4 UUID from the operating system RNG.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::RandomSourceUnavailable`] if the RNG failed.
    pub fn new_v4() -> UuidResult<Self> {
        Self::create(true)
    }

    /// Generates a new version-4 UUID using `provider`.
    pub fn new_v4_with<P: UuidProvider + ?Sized>(provider: &mut P) -> UuidResult<Self> {
        let mut uuid = Self::nil();
        uuid.generate_with(provider)?;
        Ok(uuid)
    }

    /// Wraps 16 bytes as-is. No version or variant bits are checked or set.
    pub const fn from_bytes(bytes: [u8; UUID_LEN]) -> Self {
        Self { bytes }
    }

    /// Parses a canonical lowercase hyphenated UUID string.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::MalformedUuidString`] if `input` is not exactly 36 characters with
    /// dashes at indices 8, 13, 18 and 23 and lowercase hex digits everywhere else.
    pub fn parse(input: &str) -> UuidResult<Self> {
        let mut uuid = Self::nil();
        uuid.parse_from(input)?;
        Ok(uuid)
    }

    /// Overwrites all 16 bytes with the value decoded from `input`.
    ///
    /// The whole string is validated before any byte is written, so on error `self` keeps its
    /// previous value.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::MalformedUuidString`] for any deviation from the canonical form.
    pub fn parse_from(&mut self, input: &str) -> UuidResult<()> {
        self.bytes = decode_canonical(input)?;
        Ok(())
    }

    /// Overwrites all 16 bytes with fresh random v4 bytes from the operating system RNG.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::RandomSourceUnavailable`] if the RNG failed; `self` is unchanged.
    pub fn generate(&mut self) -> UuidResult<()> {
        self.generate_with(&mut SystemProvider)
    }

    /// Overwrites all 16 bytes with the output of `provider`.
    ///
    /// The provider's bytes are stored verbatim. On error `self` is unchanged.
    pub fn generate_with<P: UuidProvider + ?Sized>(&mut self, provider: &mut P) -> UuidResult<()> {
        let mut buf = [0u8; UUID_LEN];
        provider.fill_random_v4(&mut buf)?;
        self.bytes = buf;
        Ok(())
    }

    /// Renders this UUID with `provider`'s formatter.
    pub fn to_string_with<P: UuidProvider + ?Sized>(&self, provider: &P) -> String {
        provider.format(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8; UUID_LEN] {
        &self.bytes
    }

    pub fn into_bytes(self) -> [u8; UUID_LEN] {
        self.bytes
    }

    /// Returns the version nibble (high four bits of byte 6).
    pub fn version(&self) -> u8 {
        self.bytes[6] >> 4
    }

    /// Returns true if the two high bits of byte 8 are `10` (the RFC 4122 variant).
    pub fn is_rfc4122_variant(&self) -> bool {
        self.bytes[8] & 0xc0 == 0x80
    }

    pub fn is_nil(&self) -> bool {
        self.bytes == [0; UUID_LEN]
    }

    /// Returns true if `input` is in canonical form.
    ///
    /// Purely syntactic: the same check [`Uuid::parse`] performs, without producing a value.
    pub fn is_canonical(input: &str) -> bool {
        decode_canonical(input).is_ok()
    }
}

/// Decodes the canonical form into bytes, checking every character first.
fn decode_canonical(input: &str) -> UuidResult<[u8; UUID_LEN]> {
    let raw = input.as_bytes();
    if raw.len() != CANONICAL_LEN {
        return Err(malformed(
            input,
            format!("expected {} characters, got {}", CANONICAL_LEN, raw.len()),
        ));
    }

    let mut bytes = [0u8; UUID_LEN];
    let mut offset = 0;
    let mut i = 0;

    while i < CANONICAL_LEN {
        if DASH_POSITIONS.contains(&i) {
            if raw[i] != b'-' {
                return Err(malformed(input, format!("expected '-' at index {}", i)));
            }
            i += 1;
            continue;
        }

        // Hex pairs never straddle a dash, so i + 1 is always in range here
        let high = hex_value(raw[i]).ok_or_else(|| not_hex(input, i))?;
        let low = hex_value(raw[i + 1]).ok_or_else(|| not_hex(input, i + 1))?;
        bytes[offset] = high << 4 | low;
        offset += 1;
        i += 2;
    }

    Ok(bytes)
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

fn not_hex(input: &str, index: usize) -> UuidError {
    malformed(
        input,
        format!("expected lowercase hex digit at index {}", index),
    )
}

fn malformed(input: &str, reason: String) -> UuidError {
    tracing::debug!("rejected UUID string '{}': {}", input, reason);
    UuidError::MalformedUuidString(format!("{} (got: '{}')", reason, input))
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&SystemProvider.format(&self.bytes))
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self)
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    /// Equivalent to [`Uuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse(s)
    }
}

impl From<[u8; UUID_LEN]> for Uuid {
    fn from(bytes: [u8; UUID_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Uuid> for [u8; UUID_LEN] {
    fn from(uuid: Uuid) -> Self {
        uuid.bytes
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uuid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Uuid::parse(&s).map_err(serde::de::Error::custom)
    }
}
