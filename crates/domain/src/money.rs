//! Fixed-point currency amounts.
//!
//! All billing arithmetic in tradehub runs on integer cents so that repeated
//! recomputation of the same fee is deterministic and bit-exact across
//! platforms. Binary floating point is never involved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A currency amount in whole cents.
///
/// Serialized as the raw cent count (`2977` for `$29.77`). Rounding only ever
/// happens at the parse boundary ([`Money::from_str`]), never during
/// arithmetic.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero cents.
    pub const ZERO: Money = Money(0);

    /// Wrap a cent count.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The amount in whole cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Saturating addition.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating multiplication by an item count.
    #[must_use]
    pub const fn saturating_mul(self, count: i64) -> Self {
        Self(self.0.saturating_mul(count))
    }

    /// Whether the amount is strictly below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    /// Parse a decimal string such as `29.77` into cents.
    ///
    /// Amounts with more than two fractional digits are rounded **half up**
    /// at the third digit; this is the single rounding policy for the whole
    /// workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAmount`] for anything that is not a
    /// plain decimal number (group separators, currency symbols, and
    /// exponents are all rejected).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidAmount(s.to_string());

        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, frac) = match unsigned.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (unsigned, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let frac = frac.as_bytes();
        let digit = |idx: usize| frac.get(idx).map_or(0, |b| i64::from(b - b'0'));
        let mut cents = digit(0) * 10 + digit(1);
        // Round half up at the third fractional digit.
        if digit(2) >= 5 {
            cents += 1;
        }

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_cents_with_two_decimals() {
        assert_eq!(Money::from_cents(2977).to_string(), "29.77");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
        assert_eq!(Money::from_cents(-125).to_string(), "-1.25");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn should_parse_plain_decimal_strings() {
        assert_eq!("29.77".parse::<Money>().unwrap(), Money::from_cents(2977));
        assert_eq!("5".parse::<Money>().unwrap(), Money::from_cents(500));
        assert_eq!("5.0".parse::<Money>().unwrap(), Money::from_cents(500));
        assert_eq!(".5".parse::<Money>().unwrap(), Money::from_cents(50));
        assert_eq!("-1.25".parse::<Money>().unwrap(), Money::from_cents(-125));
    }

    #[test]
    fn should_round_half_up_at_the_third_decimal() {
        assert_eq!("29.774".parse::<Money>().unwrap(), Money::from_cents(2977));
        assert_eq!("29.775".parse::<Money>().unwrap(), Money::from_cents(2978));
        assert_eq!("29.779".parse::<Money>().unwrap(), Money::from_cents(2978));
        // Digits past the third are ignored, matching the documented policy.
        assert_eq!(
            "29.7749".parse::<Money>().unwrap(),
            Money::from_cents(2977)
        );
    }

    #[test]
    fn should_reject_malformed_amounts() {
        for input in ["", ".", "$29.77", "29,77", "1e3", "29.7a", "--1"] {
            assert!(
                input.parse::<Money>().is_err(),
                "expected {input:?} to be rejected"
            );
        }
    }

    #[test]
    fn should_roundtrip_display_and_parse() {
        for cents in [0, 1, 99, 100, 2977, 123_456] {
            let amount = Money::from_cents(cents);
            let parsed: Money = amount.to_string().parse().unwrap();
            assert_eq!(parsed, amount);
        }
    }

    #[test]
    fn should_serialize_as_raw_cent_count() {
        let json = serde_json::to_string(&Money::from_cents(2977)).unwrap();
        assert_eq!(json, "2977");
        let parsed: Money = serde_json::from_str("2977").unwrap();
        assert_eq!(parsed, Money::from_cents(2977));
    }

    #[test]
    fn should_saturate_instead_of_overflowing() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.saturating_add(Money::from_cents(1)), max);
        assert_eq!(max.saturating_mul(2), max);
    }
}
