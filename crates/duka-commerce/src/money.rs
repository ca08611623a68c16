//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. Catalog payloads and
//! the persisted cart carry prices as plain decimal numbers, so the
//! [`as_decimal`] serde adapter converts at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Kenyan shilling.
    #[default]
    KES,
}

impl Currency {
    /// Get the currency code (e.g., "KES").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::KES => "KES",
        }
    }

    /// Get the display label placed before amounts (e.g., "Ksh").
    pub fn label(&self) -> &'static str {
        match self {
            Currency::KES => "Ksh",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Format an arbitrary decimal amount with this currency's label.
    ///
    /// The amount is rounded to the currency's places and formatted as-is,
    /// so values beyond the range of [`Money`] still print their true
    /// digits. NaN renders as `NaN` and infinities as `∞`.
    ///
    /// ```
    /// use duka_commerce::money::Currency;
    /// assert_eq!(Currency::KES.format_decimal(1234.5), "Ksh 1,234.50");
    /// assert_eq!(Currency::KES.format_decimal(f64::NAN), "Ksh NaN");
    /// ```
    pub fn format_decimal(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{} NaN", self.label());
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{} {}\u{221e}", self.label(), sign);
        }

        let fixed = format!("{:.*}", self.decimal_places() as usize, amount.abs());
        let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let nonzero = fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let sign = if amount < 0.0 && nonzero { "-" } else { "" };

        let mut text = format!("{} {}{}", self.label(), sign, group_digits(whole));
        if !frac.is_empty() {
            text.push('.');
            text.push_str(frac);
        }
        text
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding half away from
    /// zero. Returns `None` for non-finite amounts and for amounts whose
    /// cents do not fit in an `i64`.
    ///
    /// ```
    /// use duka_commerce::money::{Money, Currency};
    /// let price = Money::try_from_decimal(49.99, Currency::KES).unwrap();
    /// assert_eq!(price.amount_cents, 4999);
    /// assert!(Money::try_from_decimal(1e20, Currency::KES).is_none());
    /// ```
    pub fn try_from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let cents = (amount * multiplier as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(cents as i64, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "Ksh 1,234.50").
    pub fn display(&self) -> String {
        format!("{} {}", self.currency.label(), self.display_amount())
    }

    /// Format the grouped amount without label (e.g., "1,234.50").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let magnitude = self.amount_cents.unsigned_abs();
        let whole = group_digits(&(magnitude / divisor).to_string());
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        format!(
            "{sign}{whole}.{frac:0width$}",
            frac = magnitude % divisor,
            width = places as usize
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a decimal amount in Kenyan shillings.
pub fn format_ksh(amount: f64) -> String {
    Currency::KES.format_decimal(amount)
}

/// Insert a comma between every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Serde adapter that writes [`Money`] as a plain decimal number and reads
/// it back in the default currency.
pub mod as_decimal {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::try_from_decimal(amount, Currency::default()).ok_or_else(|| {
            serde::de::Error::custom(format!("price {} is not a representable amount", amount))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::try_from_decimal(49.99, Currency::KES).unwrap();
        assert_eq!(m.amount_cents, 4999);

        let m = Money::try_from_decimal(1000.0, Currency::KES).unwrap();
        assert_eq!(m.amount_cents, 100_000);
    }

    #[test]
    fn test_from_decimal_rejects_out_of_range() {
        assert!(Money::try_from_decimal(1e20, Currency::KES).is_none());
        assert!(Money::try_from_decimal(-1e20, Currency::KES).is_none());
        assert!(Money::try_from_decimal(f64::NAN, Currency::KES).is_none());
        assert!(Money::try_from_decimal(f64::INFINITY, Currency::KES).is_none());
        assert!(Money::try_from_decimal(1e16, Currency::KES).is_some());
    }

    #[test]
    fn test_money_display_groups_thousands() {
        assert_eq!(Money::new(0, Currency::KES).display(), "Ksh 0.00");
        assert_eq!(Money::new(99, Currency::KES).display(), "Ksh 0.99");
        assert_eq!(Money::new(100_000, Currency::KES).display(), "Ksh 1,000.00");
        assert_eq!(
            Money::new(12_345_678_905, Currency::KES).display(),
            "Ksh 123,456,789.05"
        );
        assert_eq!(Money::new(-150_000, Currency::KES).display(), "Ksh -1,500.00");
        assert_eq!(
            Money::new(i64::MIN, Currency::KES).display(),
            "Ksh -92,233,720,368,547,758.08"
        );
    }

    #[test]
    fn test_format_ksh_non_finite() {
        assert_eq!(format_ksh(f64::NAN), "Ksh NaN");
        assert_eq!(format_ksh(f64::INFINITY), "Ksh \u{221e}");
        assert_eq!(format_ksh(f64::NEG_INFINITY), "Ksh -\u{221e}");
    }

    #[test]
    fn test_format_ksh_rounds_to_two_places() {
        assert_eq!(format_ksh(0.0), "Ksh 0.00");
        assert_eq!(format_ksh(999.0), "Ksh 999.00");
        assert_eq!(format_ksh(2500.0), "Ksh 2,500.00");
        assert_eq!(format_ksh(1999.999), "Ksh 2,000.00");
        assert_eq!(format_ksh(-1234.5), "Ksh -1,234.50");
        assert_eq!(format_ksh(-0.001), "Ksh 0.00");
    }

    #[test]
    fn test_format_ksh_beyond_cents_range() {
        assert_eq!(format_ksh(1e20), "Ksh 100,000,000,000,000,000,000.00");
        assert_eq!(format_ksh(-1e18), "Ksh -1,000,000,000,000,000,000.00");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0"), "0");
        assert_eq!(group_digits("123"), "123");
        assert_eq!(group_digits("1234"), "1,234");
        assert_eq!(group_digits("123456"), "123,456");
        assert_eq!(group_digits("1234567"), "1,234,567");
    }

    #[derive(Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "as_decimal")]
        price: Money,
    }

    #[test]
    fn test_as_decimal_round_trip() {
        let parsed: Priced = serde_json::from_str(r#"{"price": 1234.5}"#).unwrap();
        assert_eq!(parsed.price.amount_cents, 123_450);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"{"price":1234.5}"#);
    }

    #[test]
    fn test_as_decimal_rejects_huge_price() {
        let parsed: Result<Priced, _> = serde_json::from_str(r#"{"price": 1e20}"#);
        assert!(parsed.is_err());
    }
}
