//! # Fixed-Point Money
//!
//! Monetary fields in a transfer record — the amount, the wallet balance,
//! the SOL and token prices — are stored as [`Decimal`]: an unsigned count
//! of 10^-8 units. No binary floating point, ever. A value parsed from
//! "100.23" is stored as exactly 10_023_000_000 units and renders back as
//! exactly "100.23", today and in every future read.
//!
//! The ledger never does arithmetic on these values; it stores what the
//! caller submitted and gates who may replace them. That is why `Decimal`
//! has parsing, display, and comparison — and deliberately no `Add`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::DECIMAL_SCALE;

/// Number of 10^-8 units in one whole unit.
const UNITS_PER_WHOLE: u64 = 10u64.pow(DECIMAL_SCALE);

/// Errors that can occur while parsing a decimal string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecimalParseError {
    /// The input was empty (or just a lone decimal point).
    #[error("empty decimal string")]
    Empty,

    /// A character other than digits and a single '.' was found.
    /// Signs are rejected too — ledger values are unsigned.
    #[error("invalid character in decimal string")]
    InvalidCharacter,

    /// More fractional digits than the fixed scale can represent.
    #[error("too many fractional digits: got {got}, scale is {max}")]
    TooManyFractionalDigits {
        /// Number of digits after the decimal point in the input.
        got: usize,
        /// Maximum representable fractional digits.
        max: u32,
    },

    /// The value does not fit in the underlying 64-bit unit count.
    #[error("decimal value overflows the representable range")]
    Overflow,
}

/// An exact, unsigned fixed-point decimal with 8 fractional digits.
///
/// # Examples
///
/// ```
/// use tracker_ledger::decimal::Decimal;
///
/// let amount: Decimal = "100.23".parse().unwrap();
/// assert_eq!(amount.units(), 10_023_000_000);
/// assert_eq!(amount.to_string(), "100.23");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal {
    /// Value in 10^-8 units.
    units: u64,
}

impl Decimal {
    /// Zero.
    pub const ZERO: Decimal = Decimal { units: 0 };

    /// Construct from a raw unit count (10^-8 units).
    pub fn from_units(units: u64) -> Self {
        Self { units }
    }

    /// The raw unit count.
    pub fn units(&self) -> u64 {
        self.units
    }

    /// Returns `true` if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.units == 0
    }
}

impl FromStr for Decimal {
    type Err = DecimalParseError;

    /// Parse a plain decimal string: optional fractional part, no sign,
    /// no exponent, no grouping separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "." {
            return Err(DecimalParseError::Empty);
        }

        let (whole_str, frac_str) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        // A second '.' would land in frac_str and fail the digit check below.
        if !whole_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(DecimalParseError::InvalidCharacter);
        }

        if frac_str.len() > DECIMAL_SCALE as usize {
            return Err(DecimalParseError::TooManyFractionalDigits {
                got: frac_str.len(),
                max: DECIMAL_SCALE,
            });
        }

        let whole: u64 = if whole_str.is_empty() {
            0
        } else {
            whole_str
                .parse()
                .map_err(|_| DecimalParseError::Overflow)?
        };

        let frac: u64 = if frac_str.is_empty() {
            0
        } else {
            // Right-pad to the full scale: "23" with scale 8 means 23000000.
            let parsed: u64 = frac_str.parse().map_err(|_| DecimalParseError::Overflow)?;
            parsed * 10u64.pow(DECIMAL_SCALE - frac_str.len() as u32)
        };

        let units = whole
            .checked_mul(UNITS_PER_WHOLE)
            .and_then(|w| w.checked_add(frac))
            .ok_or(DecimalParseError::Overflow)?;

        Ok(Decimal { units })
    }
}

impl fmt::Display for Decimal {
    /// Canonical rendering: whole part, then the fractional part with
    /// trailing zeros trimmed; no fractional part at all for whole values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.units / UNITS_PER_WHOLE;
        let frac = self.units % UNITS_PER_WHOLE;
        if frac == 0 {
            write!(f, "{}", whole)
        } else {
            let padded = format!("{:0>width$}", frac, width = DECIMAL_SCALE as usize);
            write!(f, "{}.{}", whole, padded.trim_end_matches('0'))
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self)
    }
}

impl Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_u64(self.units)
        }
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        } else {
            Ok(Decimal {
                units: u64::deserialize(deserializer)?,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whole_and_fractional() {
        assert_eq!("100.23".parse::<Decimal>().unwrap().units(), 10_023_000_000);
        assert_eq!("0.02".parse::<Decimal>().unwrap().units(), 2_000_000);
        assert_eq!("1.5".parse::<Decimal>().unwrap().units(), 150_000_000);
        assert_eq!("5000".parse::<Decimal>().unwrap().units(), 500_000_000_000);
        assert_eq!("0".parse::<Decimal>().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_bare_fraction() {
        // ".5" is ugly but unambiguous.
        assert_eq!(".5".parse::<Decimal>().unwrap().units(), 50_000_000);
        assert_eq!("7.".parse::<Decimal>().unwrap().units(), 700_000_000);
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!("100.23".parse::<Decimal>().unwrap().to_string(), "100.23");
        assert_eq!("0.02500".parse::<Decimal>().unwrap().to_string(), "0.025");
        assert_eq!("6000.0".parse::<Decimal>().unwrap().to_string(), "6000");
        assert_eq!(Decimal::ZERO.to_string(), "0");
    }

    #[test]
    fn parse_display_is_exact() {
        // The round trip that matters: the stored value is what was written.
        for s in ["100.23", "0.02", "1.5", "5000", "0.00000001"] {
            let d: Decimal = s.parse().unwrap();
            assert_eq!(d.to_string().parse::<Decimal>().unwrap(), d);
        }
    }

    #[test]
    fn signs_rejected() {
        assert_eq!(
            "-1".parse::<Decimal>().unwrap_err(),
            DecimalParseError::InvalidCharacter
        );
        assert_eq!(
            "+1".parse::<Decimal>().unwrap_err(),
            DecimalParseError::InvalidCharacter
        );
    }

    #[test]
    fn empty_rejected() {
        assert_eq!("".parse::<Decimal>().unwrap_err(), DecimalParseError::Empty);
        assert_eq!(".".parse::<Decimal>().unwrap_err(), DecimalParseError::Empty);
    }

    #[test]
    fn excess_precision_rejected() {
        let err = "1.123456789".parse::<Decimal>().unwrap_err();
        assert_eq!(
            err,
            DecimalParseError::TooManyFractionalDigits { got: 9, max: 8 }
        );
    }

    #[test]
    fn overflow_rejected() {
        assert_eq!(
            "999999999999999999999".parse::<Decimal>().unwrap_err(),
            DecimalParseError::Overflow
        );
    }

    #[test]
    fn serde_json_uses_string() {
        let d: Decimal = "1.5".parse().unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"1.5\"");
        let back: Decimal = serde_json::from_str("\"1.5\"").unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn serde_bincode_uses_units() {
        let d: Decimal = "0.025".parse().unwrap();
        let bytes = bincode::serialize(&d).unwrap();
        let back: Decimal = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn ordering_follows_value() {
        let small: Decimal = "0.02".parse().unwrap();
        let large: Decimal = "0.025".parse().unwrap();
        assert!(small < large);
    }
}
