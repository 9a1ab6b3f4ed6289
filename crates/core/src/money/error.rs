//! Money error types.

use cambio_shared::Currency;
use cambio_shared::types::UnknownCurrency;
use thiserror::Error;

use crate::currency::ExchangeRateError;

/// Errors raised by money construction, arithmetic, and conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code is not a supported currency.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Amount could not be parsed as a decimal.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Operand is neither money nor an exact number.
    #[error("Unsupported operand type: {0}")]
    UnsupportedOperand(String),

    /// No usable exchange rate for the requested conversion.
    #[error("Exchange rate for {from} to {to} is unknown")]
    UnknownExchangeRate {
        /// Currency being converted from.
        from: Currency,
        /// Currency being converted to.
        to: Currency,
        /// Underlying quotation failure.
        #[source]
        source: ExchangeRateError,
    },

    /// Result does not fit in a decimal.
    #[error("Arithmetic overflow")]
    Overflow,
}

impl From<UnknownCurrency> for MoneyError {
    fn from(err: UnknownCurrency) -> Self {
        Self::InvalidCurrency(err.0)
    }
}
