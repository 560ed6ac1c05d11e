//! The finished digest value and its hex forms.

use std::fmt;
use std::str::FromStr;

use crate::error::{HashError, Result};

/// Largest digest the family produces (SHA-512).
pub const MAX_DIGEST_LEN: usize = 64;

/// Output lengths of SHA-1, SHA-224, SHA-256, SHA-384 and SHA-512.
const DIGEST_LENS: [usize; 5] = [20, 28, 32, 48, 64];

/// A finished message digest.
///
/// Holds the state words (already truncated for SHA-224/384) as big-endian
/// bytes. `Display` renders lowercase hex with no prefix; `{:#x}` adds `0x`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; MAX_DIGEST_LEN],
    len: usize,
}

impl Digest {
    /// Copy `bytes` into a digest. Callers guarantee a family length.
    pub(crate) fn from_slice(bytes: &[u8]) -> Digest {
        debug_assert!(DIGEST_LENS.contains(&bytes.len()));
        let mut buf = [0u8; MAX_DIGEST_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Digest { bytes: buf, len: bytes.len() }
    }

    /// Parse a hex digest, e.g. a checksum read back from a file.
    ///
    /// Accepts the plain form and the `0x`-prefixed `{:#x}` form.
    pub fn from_hex(s: &str) -> Result<Digest> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let decoded = hex::decode(digits)
            .map_err(|e| HashError::InvalidDigest(format!("{}: {}", s, e)))?;
        if !DIGEST_LENS.contains(&decoded.len()) {
            return Err(HashError::InvalidDigest(format!(
                "{} bytes is not a SHA digest length",
                decoded.len()
            )));
        }
        Ok(Digest::from_slice(&decoded))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: every variant emits at least 20 bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Lowercase hex, two characters per byte, no separators.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for Digest {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for Digest {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Digest {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&hex::encode_upper(self.as_bytes()))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Digest> {
        Digest::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC_SHA1: &str = "a9993e364706816aba3e25717850c26c9cd0d89d";

    #[test]
    fn hex_matches_bytes() {
        let d = Digest::from_hex(ABC_SHA1).unwrap();
        assert_eq!(d.len(), 20);
        assert_eq!(d.to_hex(), ABC_SHA1);
        assert_eq!(d.to_string(), ABC_SHA1);
        assert_eq!(hex::encode(d.as_bytes()), d.to_hex());
        assert_eq!(d.as_bytes()[0], 0xa9);
    }

    #[test]
    fn prefixed_and_upper_forms() {
        let d = Digest::from_hex(ABC_SHA1).unwrap();
        assert_eq!(format!("{:#x}", d), format!("0x{}", ABC_SHA1));
        assert_eq!(format!("{:x}", d), ABC_SHA1);
        assert_eq!(format!("{:X}", d), ABC_SHA1.to_uppercase());
    }

    #[test]
    fn parses_prefixed_form() {
        let d = Digest::from_hex(ABC_SHA1).unwrap();
        let back: Digest = format!("{:#x}", d).parse().unwrap();
        assert_eq!(back, d);
        let upper: Digest = format!("{:#X}", d).replace("0x", "0X").parse().unwrap();
        assert_eq!(upper, d);
        assert!(Digest::from_hex("0x").is_err());
    }

    #[test]
    fn rejects_odd_lengths() {
        assert!(matches!(
            Digest::from_hex("abcd"),
            Err(HashError::InvalidDigest(_))
        ));
        assert!(matches!(
            Digest::from_hex("zz"),
            Err(HashError::InvalidDigest(_))
        ));
    }

    #[test]
    fn equality_ignores_unused_capacity() {
        let a = Digest::from_slice(&[1u8; 32]);
        let b: Digest = hex::encode([1u8; 32]).parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, [1u8; 32]);
        assert!(a != Digest::from_slice(&[1u8; 28]));
    }
}
