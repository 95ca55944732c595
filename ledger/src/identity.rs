//! # Account Identities
//!
//! An [`Identity`] is a 32-byte public identifier denoting an account. It is
//! both a lookup key and a holder of signing authority — the submission
//! layer has already verified the cryptographic signature by the time an
//! identity reaches this crate, so here it is simply 32 opaque bytes.
//!
//! The all-zero identity is reserved as "nobody": it can appear as a field
//! default but can never hold ledger authority.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::IDENTITY_LENGTH;

/// Errors that can occur while parsing an identity from text.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The input was not valid hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// The decoded byte string has the wrong length.
    #[error("invalid identity length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes decoded.
        got: usize,
    },
}

/// A 32-byte account identity.
///
/// Displayed and serialized as lowercase hex in human-readable contexts,
/// raw bytes otherwise.
///
/// # Examples
///
/// ```
/// use tracker_ledger::identity::Identity;
///
/// let id = Identity::from_bytes([7u8; 32]);
/// let hex = id.to_string();
/// assert_eq!(hex.len(), 64);
/// assert_eq!(hex.parse::<Identity>().unwrap(), id);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity([u8; IDENTITY_LENGTH]);

impl Identity {
    /// The reserved "nobody" identity. Never a valid owner.
    pub const ZERO: Identity = Identity([0u8; IDENTITY_LENGTH]);

    /// Construct an identity from raw bytes.
    pub fn from_bytes(bytes: [u8; IDENTITY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8; IDENTITY_LENGTH] {
        &self.0
    }

    /// Returns `true` for the reserved zero identity.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, IdentityError> {
        let bytes = hex::decode(s).map_err(|e| IdentityError::InvalidHex(e.to_string()))?;
        if bytes.len() != IDENTITY_LENGTH {
            return Err(IdentityError::InvalidLength {
                expected: IDENTITY_LENGTH,
                got: bytes.len(),
            });
        }
        let mut out = [0u8; IDENTITY_LENGTH];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    /// Lowercase hex rendering of the identity.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({})", self.to_hex())
    }
}

impl FromStr for Identity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Identity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Identity::from_hex(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = <Vec<u8>>::deserialize(deserializer)?;
            if bytes.len() != IDENTITY_LENGTH {
                return Err(serde::de::Error::custom(format!(
                    "expected {}-byte identity, got {}",
                    IDENTITY_LENGTH,
                    bytes.len()
                )));
            }
            let mut out = [0u8; IDENTITY_LENGTH];
            out.copy_from_slice(&bytes);
            Ok(Identity(out))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let id = Identity::from_bytes([0xAB; 32]);
        let hex = id.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(Identity::from_hex(&hex).unwrap(), id);
    }

    #[test]
    fn zero_identity_detection() {
        assert!(Identity::ZERO.is_zero());
        assert!(!Identity::from_bytes([1u8; 32]).is_zero());
    }

    #[test]
    fn short_hex_rejected() {
        let err = Identity::from_hex("abcd").unwrap_err();
        assert!(matches!(err, IdentityError::InvalidLength { got: 2, .. }));
    }

    #[test]
    fn non_hex_rejected() {
        assert!(Identity::from_hex("zz".repeat(32).as_str()).is_err());
    }

    #[test]
    fn serde_json_uses_hex_string() {
        let id = Identity::from_bytes([0x11; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "11".repeat(32)));
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_bincode_roundtrip() {
        let id = Identity::from_bytes([0x42; 32]);
        let bytes = bincode::serialize(&id).unwrap();
        let back: Identity = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back, id);
    }
}
