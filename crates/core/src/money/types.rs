//! The `Money` value type.
//!
//! CRITICAL: Never use floating-point for money calculations.

use std::cmp::Ordering;

use cambio_shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::MoneyError;
use super::operand::Operand;
use crate::currency::conversion::{convert_amount, normalize};
use crate::currency::{ExchangeContext, ExchangeRateService};

/// An immutable amount of a single currency.
///
/// The amount is kept exactly as given and read back through
/// [`Money::amount`], normalized to four decimal places. Every operation
/// returns a new value.
///
/// Equality and ordering compare normalized amounts of the same currency;
/// values of different currencies are never equal and have no ordering.
/// Use [`Money::compare_to`] for a rate-aware comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Money {
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates money from textual amount and currency code.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidCurrency` for an unknown currency code
    /// and `MoneyError::InvalidAmount` for an unparsable amount.
    ///
    /// ```
    /// use cambio_core::money::{Money, MoneyError};
    ///
    /// let money = Money::parse("10", "usd").unwrap();
    /// assert_eq!(money.to_string(), "10.0000 USD");
    ///
    /// assert_eq!(
    ///     Money::parse("10", "XXX"),
    ///     Err(MoneyError::InvalidCurrency("XXX".into()))
    /// );
    /// ```
    pub fn parse(amount: &str, currency: &str) -> Result<Self, MoneyError> {
        let currency = currency.parse::<Currency>()?;
        let amount = amount
            .trim()
            .parse::<Decimal>()
            .map_err(|_| MoneyError::InvalidAmount(amount.to_string()))?;
        Ok(Self::new(amount, currency))
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// The amount normalized to four decimal places.
    ///
    /// Amounts above roughly `7.9e24` in magnitude have no room for four
    /// decimal places; they are returned unchanged at the largest scale that
    /// fits, so their `Display` shows fewer than four places.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        normalize(self.amount)
    }

    /// The amount exactly as stored.
    #[must_use]
    pub const fn raw_amount(&self) -> Decimal {
        self.amount
    }

    /// The currency of this amount.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value in the same currency.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.amount.abs(), self.currency)
    }

    /// Compares against `other` after converting it into this currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownExchangeRate` if a money operand cannot be
    /// converted.
    pub fn compare_to(
        &self,
        other: impl Into<Operand>,
        context: &ExchangeContext,
    ) -> Result<Ordering, MoneyError> {
        let other = self.operand_amount(other.into(), context.rates())?;
        Ok(self.amount().cmp(&other))
    }

    /// Adds `other`, converted into this currency.
    ///
    /// The sum stays in this currency unless the context has a different
    /// target currency, in which case the sum is converted into it.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownExchangeRate` if a conversion has no
    /// usable rate and `MoneyError::Overflow` if the sum does not fit.
    #[allow(clippy::should_implement_trait)]
    pub fn add(
        &self,
        other: impl Into<Operand>,
        context: &ExchangeContext,
    ) -> Result<Self, MoneyError> {
        let other = self.operand_amount(other.into(), context.rates())?;
        let sum = self
            .amount()
            .checked_add(other)
            .ok_or(MoneyError::Overflow)?;
        Self::new(sum, self.currency).convert_to(context.target_currency(), context.rates())
    }

    /// Subtracts `other`, converted into this currency.
    ///
    /// The result always stays in this currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownExchangeRate` if a conversion has no
    /// usable rate and `MoneyError::Overflow` if the difference does not fit.
    pub fn subtract(
        &self,
        other: impl Into<Operand>,
        context: &ExchangeContext,
    ) -> Result<Self, MoneyError> {
        let other = self.operand_amount(other.into(), context.rates())?;
        let difference = self
            .amount()
            .checked_sub(other)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(difference, self.currency))
    }

    /// Converts into `target` using `rates`.
    ///
    /// Returns `self` unchanged when `target` is `None` or already this
    /// currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::UnknownExchangeRate` if the pair has no usable
    /// quotation and `MoneyError::Overflow` if the product does not fit.
    pub fn convert_to(
        self,
        target: Option<Currency>,
        rates: &ExchangeRateService,
    ) -> Result<Self, MoneyError> {
        let Some(target) = target.filter(|target| *target != self.currency) else {
            return Ok(self);
        };

        let rate = rates
            .quotation(self.currency, target)
            .map_err(|source| MoneyError::UnknownExchangeRate {
                from: self.currency,
                to: target,
                source,
            })?;
        let amount = convert_amount(self.amount(), rate).ok_or(MoneyError::Overflow)?;
        trace!(from = %self, to = %target, %rate, "Converted money");
        Ok(Self::new(amount, target))
    }

    fn operand_amount(
        &self,
        other: Operand,
        rates: &ExchangeRateService,
    ) -> Result<Decimal, MoneyError> {
        match other {
            Operand::Money(money) => Ok(money.convert_to(Some(self.currency), rates)?.amount()),
            Operand::Number(number) => Ok(number),
        }
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.amount() == other.amount()
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.amount().cmp(&other.amount()))
    }
}

impl std::ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.amount, self.currency)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount(), self.currency)
    }
}
