use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const USD_CURRENCY_CODE: &str = "USD";
pub const USD_DIVISOR: i32 = 100;

//--------------------------------------        Money        ---------------------------------------------------------
/// A monetary amount expressed as an integer number of minor units. The real value is `amount / divisor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: i64,
    pub divisor: i32,
    pub currency_code: String,
}

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented as a currency amount: {0}")]
pub struct MoneyConversionError(String);

impl Default for Money {
    fn default() -> Self {
        Self::usd(0)
    }
}

impl Money {
    pub fn new(amount: i64, divisor: i32, currency_code: &str) -> Self {
        Self { amount, divisor, currency_code: currency_code.to_string() }
    }

    /// An amount in US cents.
    pub fn usd(cents: i64) -> Self {
        Self::new(cents, USD_DIVISOR, USD_CURRENCY_CODE)
    }

    /// Converts a decimal dollar value (as sent by clients, e.g. `19.99`) into cents, rounding to the nearest cent.
    pub fn try_from_dollars(dollars: f64) -> Result<Self, MoneyConversionError> {
        let cents = (dollars * f64::from(USD_DIVISOR)).round();
        if !cents.is_finite() || cents > i64::MAX as f64 || cents < i64::MIN as f64 {
            return Err(MoneyConversionError(format!("{dollars} is out of range")));
        }
        #[allow(clippy::cast_possible_truncation)]
        Ok(Self::usd(cents as i64))
    }

    /// Returns `basis_points / 10_000` of this amount, in the same currency, truncated towards zero.
    pub fn share(&self, basis_points: i64) -> Self {
        Self { amount: self.amount * basis_points / 10_000, ..self.clone() }
    }

    pub fn with_amount(&self, amount: i64) -> Self {
        Self { amount, ..self.clone() }
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.amount as f64 / f64::from(self.divisor.max(1));
        write!(f, "{value:0.2} {}", self.currency_code)
    }
}
