//! Exchange context carrying the rate table and the target currency.
//!
//! Addition results are converted into the context's target currency when one
//! is set. The target is changed through [`ExchangeContext::with_target`],
//! which returns a guard that restores the previous target when dropped.
//!
//! ```
//! use cambio_core::currency::{ExchangeContext, ExchangeRateService};
//! use cambio_shared::Currency;
//!
//! let mut context = ExchangeContext::new(ExchangeRateService::new());
//! {
//!     let mut eur = context.with_target(Currency::Eur);
//!     assert_eq!(eur.target_currency(), Some(Currency::Eur));
//!     {
//!         let gbp = eur.with_target(Currency::Gbp);
//!         assert_eq!(gbp.target_currency(), Some(Currency::Gbp));
//!     }
//!     assert_eq!(eur.target_currency(), Some(Currency::Eur));
//! }
//! assert_eq!(context.target_currency(), None);
//! ```

use std::ops::{Deref, DerefMut};

use cambio_shared::Currency;
use tracing::trace;

use super::exchange::ExchangeRateService;
use crate::money::{Money, MoneyError};

/// Rate table plus the optional target currency consulted by addition.
#[derive(Debug, Clone, Default)]
pub struct ExchangeContext {
    rates: ExchangeRateService,
    target: Option<Currency>,
}

impl ExchangeContext {
    /// Creates a context with no target currency.
    #[must_use]
    pub fn new(rates: ExchangeRateService) -> Self {
        Self {
            rates,
            target: None,
        }
    }

    /// The rate table.
    #[must_use]
    pub fn rates(&self) -> &ExchangeRateService {
        &self.rates
    }

    /// Mutable access to the rate table.
    pub fn rates_mut(&mut self) -> &mut ExchangeRateService {
        &mut self.rates
    }

    /// The currently active target currency.
    #[must_use]
    pub fn target_currency(&self) -> Option<Currency> {
        self.target
    }

    /// Makes `currency` the target until the returned scope is dropped.
    pub fn with_target(&mut self, currency: Currency) -> TargetCurrencyScope<'_> {
        let previous = self.target.replace(currency);
        trace!(target_currency = %currency, ?previous, "Entered target currency scope");
        TargetCurrencyScope {
            context: self,
            previous,
        }
    }

    /// Converts `money` into `target` using this context's rates.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownExchangeRate` if no usable rate exists.
    pub fn convert(&self, money: Money, target: Currency) -> Result<Money, MoneyError> {
        money.convert_to(Some(target), &self.rates)
    }
}

/// Guard returned by [`ExchangeContext::with_target`].
///
/// Dereferences to the context so operations and nested scopes can be used
/// through it.
#[derive(Debug)]
#[must_use = "the previous target currency is restored as soon as the scope is dropped"]
pub struct TargetCurrencyScope<'a> {
    context: &'a mut ExchangeContext,
    previous: Option<Currency>,
}

impl Deref for TargetCurrencyScope<'_> {
    type Target = ExchangeContext;

    fn deref(&self) -> &Self::Target {
        &*self.context
    }
}

impl DerefMut for TargetCurrencyScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.context
    }
}

impl Drop for TargetCurrencyScope<'_> {
    fn drop(&mut self) {
        trace!(restored = ?self.previous, "Left target currency scope");
        self.context.target = self.previous;
    }
}
