//! Money in whole Saudi riyals.
//!
//! Every price in the catalog is a whole number of SAR, so amounts are
//! plain integers and arithmetic is exact. Arithmetic saturates at the
//! `i64` bounds; a stored price that large is nonsense, but it must not
//! wrap into a negative total.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Currency code shown after every amount.
pub const CURRENCY_CODE: &str = "SAR";

/// An amount of Saudi riyals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Money {
    /// Whole riyals; negative for price reductions.
    pub amount: i64,
}

impl Money {
    pub const ZERO: Money = Money { amount: 0 };

    /// Create a new amount.
    pub const fn sar(amount: i64) -> Self {
        Self { amount }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Add, clamping at the `i64` bounds.
    pub fn saturating_add(self, other: Money) -> Money {
        Money::sar(self.amount.saturating_add(other.amount))
    }

    /// Format as `8,500 SAR`.
    pub fn display(&self) -> String {
        format!("{} {}", group_thousands(self.amount), CURRENCY_CODE)
    }

    /// Format a price delta as `+1,200 SAR` or `-1,400 SAR`.
    ///
    /// Zero renders as an empty string; the option costs nothing extra.
    pub fn delta_label(&self) -> String {
        if self.amount > 0 {
            format!("+{}", self.display())
        } else if self.amount < 0 {
            self.display()
        } else {
            String::new()
        }
    }
}

/// Insert `,` every three digits, keeping the sign.
fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

impl<'de> Deserialize<'de> for Money {
    /// Accepts integers and numerics such as `8500.00`, rounded to whole riyals.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(amount) => Ok(Money::sar(amount)),
            Raw::Float(amount) if amount.is_finite() => Ok(Money::sar(amount.round() as i64)),
            Raw::Float(amount) => Err(serde::de::Error::custom(format!(
                "invalid amount: {}",
                amount
            ))),
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = self.saturating_add(other);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::sar(self.amount.saturating_sub(other.amount))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::sar(self.amount.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::sar(8500).display(), "8,500 SAR");
        assert_eq!(Money::sar(14500).display(), "14,500 SAR");
        assert_eq!(Money::sar(1234567).display(), "1,234,567 SAR");
        assert_eq!(Money::sar(950).display(), "950 SAR");
        assert_eq!(Money::sar(0).display(), "0 SAR");
    }

    #[test]
    fn test_display_keeps_sign() {
        assert_eq!(Money::sar(-1400).display(), "-1,400 SAR");
    }

    #[test]
    fn test_delta_label() {
        assert_eq!(Money::sar(1200).delta_label(), "+1,200 SAR");
        assert_eq!(Money::sar(-1400).delta_label(), "-1,400 SAR");
        assert_eq!(Money::ZERO.delta_label(), "");
    }

    #[test]
    fn test_arithmetic() {
        let total: Money = [Money::sar(8500), Money::sar(1200), Money::sar(-200)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::sar(9500));
        assert_eq!(Money::sar(5) - Money::sar(7), Money::sar(-2));
    }

    #[test]
    fn test_arithmetic_saturates() {
        assert_eq!(Money::sar(i64::MAX) + Money::sar(1), Money::sar(i64::MAX));
        assert_eq!(Money::sar(i64::MIN) - Money::sar(1), Money::sar(i64::MIN));
        assert_eq!(-Money::sar(i64::MIN), Money::sar(i64::MAX));

        let mut total = Money::sar(i64::MAX - 1);
        total += Money::sar(5);
        assert_eq!(total, Money::sar(i64::MAX));
    }

    #[test]
    fn test_huge_float_price_clamps() {
        let m: Money = serde_json::from_str("1e30").unwrap();
        assert_eq!(m, Money::sar(i64::MAX));
    }

    #[test]
    fn test_deserialize_int_and_numeric() {
        let m: Money = serde_json::from_str("8500").unwrap();
        assert_eq!(m, Money::sar(8500));
        let m: Money = serde_json::from_str("8500.00").unwrap();
        assert_eq!(m, Money::sar(8500));
        assert!(serde_json::from_str::<Money>("\"8500\"").is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Money::sar(-1400)).unwrap(), "-1400");
    }
}
