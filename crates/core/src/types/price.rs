//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept as [`rust_decimal::Decimal`] so that line totals and cart
//! totals stay exact; binary floating point is never involved past the wire.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Multiply by a quantity, e.g. a unit price into a line total.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Format for display (e.g., "$19.99").
    ///
    /// Rounds to 2 decimal places with midpoints away from zero, so
    /// `9.995` displays as `"$10.00"`.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{rounded:.2}", self.currency_code.symbol())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimal_places() {
        let price = Price::new(Decimal::new(1998, 2), CurrencyCode::USD);
        assert_eq!(price.display(), "$19.98");
    }

    #[test]
    fn test_display_pads_whole_amounts() {
        let price = Price::new(Decimal::from(10), CurrencyCode::USD);
        assert_eq!(price.display(), "$10.00");
    }

    #[test]
    fn test_display_rounds_midpoint_away_from_zero() {
        // 9.995 rounds up, not to even
        let price = Price::new(Decimal::new(9995, 3), CurrencyCode::USD);
        assert_eq!(price.display(), "$10.00");
    }

    #[test]
    fn test_times_quantity() {
        let unit = Price::new(Decimal::new(999, 2), CurrencyCode::USD);
        let line = unit.times(2);
        assert_eq!(line.amount(), Decimal::new(1998, 2));
        assert_eq!(line.display(), "$19.98");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::EUR.symbol(), "\u{20ac}");
        assert_eq!(CurrencyCode::GBP.code(), "GBP");
    }
}
