//! Exchange rates, quotations, and the target currency context.

pub mod context;
pub mod conversion;
pub mod exchange;

#[cfg(test)]
mod props;

pub use context::{ExchangeContext, TargetCurrencyScope};
pub use conversion::{AMOUNT_SCALE, normalize};
pub use exchange::{ExchangeRateError, ExchangeRateService};
