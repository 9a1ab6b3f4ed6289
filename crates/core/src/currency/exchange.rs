//! Exchange rate table and quotations.

use std::collections::HashMap;

use cambio_shared::{AppResult, Currency, RatesConfig};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised by rate lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeRateError {
    /// A rate for either side of the pair is missing or zero.
    #[error("Invalid rate for {origin}/{target} currency pair")]
    InvalidQuotation {
        /// Currency being converted from.
        origin: Currency,
        /// Currency being converted to.
        target: Currency,
    },
}

/// Mutable table of rates, each relative to an implicit base currency.
///
/// A rate of `r` for currency `C` means one unit of `C` is worth `r` units of
/// the base. The quotation for a pair is therefore `origin / target`.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRateService {
    rates: HashMap<Currency, Decimal>,
}

impl ExchangeRateService {
    /// Creates an empty rate table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rate table seeded from `(currency, rate)` pairs.
    ///
    /// Later pairs overwrite earlier ones for the same currency.
    pub fn with_rates<I>(rates: I) -> Self
    where
        I: IntoIterator<Item = (Currency, Decimal)>,
    {
        Self {
            rates: rates.into_iter().collect(),
        }
    }

    /// Creates a rate table from configuration.
    ///
    /// The configured base currency gets a rate of 1 unless the table
    /// already lists it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the base or any table entry is invalid.
    pub fn from_config(config: &RatesConfig) -> AppResult<Self> {
        let base = config.base_currency()?;
        let mut service = Self::with_rates(config.entries()?);
        service.rates.entry(base).or_insert(Decimal::ONE);
        debug!(base = %base, currencies = service.len(), "Seeded exchange rates");
        Ok(service)
    }

    /// Inserts or replaces the rate for `currency`, returning the previous rate.
    pub fn update_rate(&mut self, currency: Currency, rate: Decimal) -> Option<Decimal> {
        let previous = self.rates.insert(currency, rate);
        debug!(currency = %currency, %rate, ?previous, "Updated exchange rate");
        previous
    }

    /// Returns the rate for `currency`, if one is known.
    #[must_use]
    pub fn get_rate(&self, currency: Currency) -> Option<Decimal> {
        self.rates.get(&currency).copied()
    }

    /// Removes the rate for `currency`, returning it if it was present.
    pub fn remove_rate(&mut self, currency: Currency) -> Option<Decimal> {
        self.rates.remove(&currency)
    }

    /// Number of currencies with a known rate.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no rates are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Currencies with a known rate, sorted.
    #[must_use]
    pub fn currencies(&self) -> Vec<Currency> {
        let mut currencies: Vec<_> = self.rates.keys().copied().collect();
        currencies.sort_unstable();
        currencies
    }

    /// Returns how many units of `target` one unit of `origin` buys.
    ///
    /// # Errors
    ///
    /// Returns `ExchangeRateError::InvalidQuotation` if either rate is
    /// missing or zero, or if the division overflows.
    pub fn quotation(
        &self,
        origin: Currency,
        target: Currency,
    ) -> Result<Decimal, ExchangeRateError> {
        let invalid = || {
            warn!(origin = %origin, target = %target, "No usable quotation");
            ExchangeRateError::InvalidQuotation { origin, target }
        };

        let origin_rate = self
            .get_rate(origin)
            .filter(|rate| !rate.is_zero())
            .ok_or_else(invalid)?;
        let target_rate = self
            .get_rate(target)
            .filter(|rate| !rate.is_zero())
            .ok_or_else(invalid)?;

        origin_rate.checked_div(target_rate).ok_or_else(invalid)
    }
}
