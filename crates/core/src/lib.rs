//! Core monetary logic for Cambio.
//!
//! This crate contains pure business logic with no I/O.
//!
//! # Modules
//!
//! - `money` - The `Money` value type, its arithmetic and comparison
//! - `currency` - Exchange rate table, quotations, and the target currency context
//!
//! ```
//! use cambio_core::currency::{ExchangeContext, ExchangeRateService};
//! use cambio_core::money::Money;
//! use cambio_shared::Currency;
//! use rust_decimal_macros::dec;
//!
//! let rates = ExchangeRateService::with_rates([
//!     (Currency::Eur, dec!(1)),
//!     (Currency::Usd, dec!(0.9)),
//! ]);
//! let mut context = ExchangeContext::new(rates);
//!
//! let ten = Money::new(dec!(10), Currency::Usd);
//! assert_eq!(context.convert(ten, Currency::Eur)?.to_string(), "9.0000 EUR");
//!
//! let scope = context.with_target(Currency::Eur);
//! let sum = Money::new(dec!(5), Currency::Usd).add(Money::new(dec!(5), Currency::Usd), &scope)?;
//! assert_eq!(sum.to_string(), "9.0000 EUR");
//! # Ok::<(), cambio_core::money::MoneyError>(())
//! ```

pub mod currency;
pub mod money;

pub use currency::{ExchangeContext, ExchangeRateError, ExchangeRateService, TargetCurrencyScope};
pub use money::{Money, MoneyError, Operand};
