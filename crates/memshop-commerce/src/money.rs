//! Money type for representing monetary values.
//!
//! Uses an integer count of minor units (kopecks, cents) to avoid
//! floating-point precision issues in totals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₽").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    fn group_separator(&self) -> char {
        match self {
            Currency::RUB => '\u{a0}',
            Currency::USD | Currency::EUR => ',',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Currency::RUB => ',',
            Currency::USD | Currency::EUR => '.',
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., kopecks).
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole currency units.
    ///
    /// ```
    /// use memshop_commerce::money::{Currency, Money};
    /// let price = Money::from_major(8990, Currency::RUB);
    /// assert_eq!(price.amount_minor, 899_000);
    /// ```
    pub fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount.saturating_mul(currency.minor_per_major()), currency)
    }

    /// Checked variant of [`Money::from_major`]; None when the amount in
    /// minor units does not fit an `i64`.
    pub fn try_from_major(amount: i64, currency: Currency) -> Option<Self> {
        amount
            .checked_mul(currency.minor_per_major())
            .map(|amount_minor| Self::new(amount_minor, currency))
    }

    /// Shorthand for whole rubles, the unit catalog prices are quoted in.
    pub fn rub(amount: i64) -> Self {
        Self::from_major(amount, Currency::RUB)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Try to add another Money value.
    ///
    /// Returns None if currencies don't match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns None on currency mismatch or overflow.
    pub fn try_sum<'a>(iter: impl IntoIterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Format the amount without a currency symbol (e.g., "8 990").
    ///
    /// Thousands are grouped and the fraction is only shown when it is
    /// non-zero, matching how the storefront prints prices.
    pub fn display_amount(&self) -> String {
        let per_major = self.currency.minor_per_major().unsigned_abs();
        let abs = self.amount_minor.unsigned_abs();
        let major = abs / per_major;
        let minor = abs % per_major;

        let digits = major.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.currency.group_separator());
            }
            grouped.push(ch);
        }

        if minor != 0 {
            let places = self.currency.decimal_places() as usize;
            grouped.push(self.currency.decimal_separator());
            grouped.push_str(&format!("{:0places$}", minor));
        }

        if self.amount_minor < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Format as a display string (e.g., "8 990 ₽", "$1,234.50").
    pub fn display(&self) -> String {
        match self.currency {
            Currency::RUB => format!("{}\u{a0}{}", self.display_amount(), self.currency.symbol()),
            Currency::USD | Currency::EUR => {
                format!("{}{}", self.currency.symbol(), self.display_amount())
            }
        }
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
    use rstest::rstest;

    #[test]
    fn test_money_from_major() {
        let m = Money::rub(8990);
        assert_eq!(m.amount_minor, 899_000);
        assert_eq!(m.currency, Currency::RUB);
    }

    #[rstest]
    #[case(Money::rub(0), "0\u{a0}\u{20bd}")]
    #[case(Money::rub(990), "990\u{a0}\u{20bd}")]
    #[case(Money::rub(8990), "8\u{a0}990\u{a0}\u{20bd}")]
    #[case(Money::rub(1_234_567), "1\u{a0}234\u{a0}567\u{a0}\u{20bd}")]
    #[case(Money::new(123_450, Currency::RUB), "1\u{a0}234,50\u{a0}\u{20bd}")]
    #[case(Money::new(123_450, Currency::USD), "$1,234.50")]
    #[case(Money::new(5, Currency::EUR), "\u{20ac}0.05")]
    #[case(Money::rub(-8990), "-8\u{a0}990\u{a0}\u{20bd}")]
    fn test_money_display(#[case] money: Money, #[case] expected: &str) {
        assert_eq!(money.display(), expected);
    }

    #[test]
    fn test_money_addition() {
        let a = Money::rub(1000);
        let b = Money::rub(500);
        assert_eq!(a.try_add(&b), Some(Money::rub(1500)));
    }

    #[test]
    fn test_money_currency_mismatch() {
        let rub = Money::rub(1000);
        let usd = Money::from_major(1000, Currency::USD);
        assert_eq!(rub.try_add(&usd), None);
    }

    #[test]
    fn test_money_multiply_overflow() {
        let m = Money::new(i64::MAX / 2 + 1, Currency::RUB);
        assert_eq!(m.try_multiply(2), None);
        assert_eq!(Money::rub(8990).try_multiply(2), Some(Money::rub(17980)));
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::rub(1), Money::rub(2), Money::rub(3)];
        assert_eq!(Money::try_sum(&values, Currency::RUB), Some(Money::rub(6)));
        assert_eq!(Money::try_sum(&[], Currency::USD), Some(Money::zero(Currency::USD)));
    }

    #[test]
    fn test_money_try_from_major() {
        assert_eq!(Money::try_from_major(8990, Currency::RUB), Some(Money::rub(8990)));
        assert_eq!(Money::try_from_major(100_000_000_000_000_000, Currency::RUB), None);
        assert_eq!(Money::try_from_major(i64::MIN, Currency::USD), None);
    }
}
