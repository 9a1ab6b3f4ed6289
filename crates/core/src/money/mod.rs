//! Monetary values and their arithmetic.

pub mod error;
pub mod operand;
pub mod types;

#[cfg(test)]
mod props;

pub use error::MoneyError;
pub use operand::Operand;
pub use types::Money;
