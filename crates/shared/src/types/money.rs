//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Prefix used for negative amounts in reports, e.g. `(-)500`.
pub const NEGATIVE_PREFIX: &str = "(-)";

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units, carrying at most the currency's minor-unit scale.
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "INR", "USD").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee
    #[default]
    Inr,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Indonesian Rupiah
    Idr,
    /// Japanese Yen
    Jpy,
}

/// How the integer part of an amount is split into digit groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitGrouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567 (lakh/crore)
    Indian,
}

impl Currency {
    /// Number of decimal places in the currency's minor unit.
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        match self {
            Self::Jpy => 0,
            Self::Inr | Self::Usd | Self::Eur | Self::Idr => 2,
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Idr => "Rp",
            Self::Jpy => "¥",
        }
    }

    /// Digit grouping convention used when rendering amounts.
    #[must_use]
    pub const fn grouping(self) -> DigitGrouping {
        match self {
            Self::Inr => DigitGrouping::Indian,
            Self::Usd | Self::Eur | Self::Idr | Self::Jpy => DigitGrouping::Thousands,
        }
    }

    /// Returns true if `amount` has no more decimal places than the minor unit allows.
    #[must_use]
    pub fn fits_minor_units(self, amount: Decimal) -> bool {
        amount.normalize().scale() <= self.minor_units()
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

/// Renders the symbol with grouped digits.
///
/// Negative amounts keep their sign as a `(-)` prefix; they are never
/// clamped to zero.
impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = group_digits(self.amount.abs(), self.currency.grouping());
        if self.is_negative() {
            write!(f, "{NEGATIVE_PREFIX}{}{digits}", self.currency.symbol())
        } else {
            write!(f, "{}{digits}", self.currency.symbol())
        }
    }
}

fn group_digits(amount: Decimal, grouping: DigitGrouping) -> String {
    let text = amount.to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut groups: Vec<String> = Vec::new();
    let mut end = digits.len();
    let mut width = 3;
    while end > 0 {
        let start = end.saturating_sub(width);
        groups.push(digits[start..end].iter().collect());
        end = start;
        if grouping == DigitGrouping::Indian {
            width = 2;
        }
    }
    groups.reverse();

    let mut out = groups.join(",");
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inr => write!(f, "INR"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Idr => write!(f, "IDR"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INR" => Ok(Self::Inr),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "IDR" => Ok(Self::Idr),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
