//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 cents) so that sums of many
//! transactions never drift. On the wire amounts are plain decimal numbers in
//! major units (`5000`, `12.5`), which is what exported documents and the
//! persisted state contain.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::preferences::Currency;

/// Largest magnitude accepted on input, in major units. Amounts up to this
/// have at most 15 significant digits with their cents, so they survive the
/// decimal form they are stored in without losing a cent.
pub const MAX_MAJOR_UNITS: i64 = 1_000_000_000_000;

const MAX_CENTS: i64 = MAX_MAJOR_UNITS * 100;
const MAX_MAJOR: f64 = MAX_MAJOR_UNITS as f64;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from user input or stored data
    pub const MAX: Money = Money(MAX_CENTS);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole major units
    pub const fn from_major_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a Money amount from a decimal number of major units
    ///
    /// Rejects NaN, infinities and magnitudes too large to represent exactly.
    /// Sub-cent fractions are rounded to the nearest cent.
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// assert_eq!(Money::from_major(12.5).unwrap().cents(), 1250);
    /// assert!(Money::from_major(f64::NAN).is_err());
    /// ```
    pub fn from_major(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite);
        }
        if value.abs() > MAX_MAJOR {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }
        Ok(Self((value * 100.0).round() as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal number of major units
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Check that the magnitude is no larger than [`Money::MAX`]
    pub const fn is_within_limit(&self) -> bool {
        self.0 >= -MAX_CENTS && self.0 <= MAX_CENTS
    }

    /// Add, returning `None` if the result would pass [`Money::MAX`]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .filter(|m| m.is_within_limit())
    }

    /// Subtract, flooring the result at zero
    pub fn saturating_sub_floor(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0).max(0))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "€10.50", "10", "1,200.00".
    /// Digits past the cents are rounded half away from zero, as when reading
    /// a stored decimal amount.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        // Remove a currency symbol if present
        let rest = Currency::ALL
            .iter()
            .find_map(|c| rest.strip_prefix(c.symbol()))
            .unwrap_or(rest)
            .trim_start();

        let cleaned: String = rest.chars().filter(|c| *c != ',').collect();
        let (whole, frac) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| MoneyParseError::OutOfRange(s.to_string()))?
        };

        let digit = |idx: usize| -> i64 {
            frac.as_bytes()
                .get(idx)
                .map(|b| i64::from(b - b'0'))
                .unwrap_or(0)
        };
        let round_up = i64::from(digit(2) >= 5);
        let frac_cents = digit(0) * 10 + digit(1) + round_up;

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .filter(|c| *c <= MAX_CENTS)
            .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_major())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_major(value).map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    NotFinite,
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::NotFinite => write!(f, "Amount must be a finite number"),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(5000.0).unwrap(), Money::from_major_units(5000));
        assert_eq!(Money::from_major(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::from_major(f64::INFINITY), Err(MoneyParseError::NotFinite));
        assert!(matches!(
            Money::from_major(1e20),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(Money::from_cents(5).format_with_symbol("€"), "€0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
        assert_eq!(b.saturating_sub_floor(a), Money::zero());
        assert_eq!(a.saturating_sub_floor(b).cents(), 500);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("1,200.00").unwrap().cents(), 120000);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse("€ 12").unwrap().cents(), 1200);
        assert_eq!(Money::parse("-£3.10").unwrap().cents(), -310);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("+5").is_err());
    }

    #[test]
    fn test_parse_rejects_leading_junk() {
        assert!(matches!(
            Money::parse("abc5"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(Money::parse("USD5").is_err());
        assert!(Money::parse("$$5").is_err());
    }

    #[test]
    fn test_parse_rounds_extra_decimals_like_stored_amounts() {
        assert_eq!(Money::parse("5.999").unwrap().cents(), 600);
        assert_eq!(Money::parse("5.994").unwrap().cents(), 599);
        assert_eq!(Money::parse("0.005").unwrap().cents(), 1);
        assert_eq!(Money::parse("-5.999").unwrap().cents(), -600);

        for text in ["5.999", "19.99", "0.125"] {
            let stored: Money = serde_json::from_str(text).unwrap();
            assert_eq!(Money::parse(text).unwrap(), stored, "{}", text);
        }
    }

    #[test]
    fn test_parse_limit() {
        let at_limit = MAX_MAJOR_UNITS.to_string();
        assert_eq!(Money::parse(&at_limit).unwrap(), Money::MAX);
        assert!(matches!(
            Money::parse(&format!("{}.01", at_limit)),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("100000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("92233720368547758"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("99999999999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_largest_amount_reloads() {
        let json = serde_json::to_string(&Money::MAX).unwrap();
        let reloaded: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, Money::MAX);

        let just_under = Money::MAX - Money::from_cents(1);
        let json = serde_json::to_string(&just_under).unwrap();
        let reloaded: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, just_under);

        let over = Money::MAX + Money::from_cents(1);
        let json = serde_json::to_string(&over).unwrap();
        assert!(serde_json::from_str::<Money>(&json).is_err());
    }

    #[test]
    fn test_checked_add_respects_limit() {
        assert_eq!(
            Money::from_cents(1).checked_add(Money::from_cents(2)),
            Some(Money::from_cents(3))
        );
        assert_eq!(Money::MAX.checked_add(Money::zero()), Some(Money::MAX));
        assert_eq!(Money::MAX.checked_add(Money::from_cents(1)), None);
        assert!(!Money::from_cents(i64::MAX).is_within_limit());
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_overflowing() {
        let huge = Money::from_cents(i64::MAX);
        assert_eq!((huge + huge).cents(), i64::MAX);
        assert_eq!((-huge - huge).cents(), i64::MIN);
        assert_eq!((-Money::from_cents(i64::MIN)).cents(), i64::MAX);

        let total: Money = std::iter::repeat(Money::MAX).take(100_000).sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Money::from_major_units(5000)).unwrap(), "5000");
        assert_eq!(serde_json::to_string(&Money::from_cents(1250)).unwrap(), "12.5");

        let whole: Money = serde_json::from_str("450").unwrap();
        assert_eq!(whole, Money::from_major_units(450));
        let fractional: Money = serde_json::from_str("19.99").unwrap();
        assert_eq!(fractional.cents(), 1999);
    }
}
