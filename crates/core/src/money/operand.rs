//! Right-hand side of money arithmetic and comparison.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::MoneyError;
use super::types::Money;

/// A value money can be added to, subtracted from, or compared with.
///
/// Money operands are converted into the left-hand currency; numbers are
/// taken as amounts already in that currency. Floating-point values are
/// never accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Another monetary value.
    Money(Money),
    /// A bare, exact number.
    Number(Decimal),
}

impl From<Money> for Operand {
    fn from(money: Money) -> Self {
        Self::Money(money)
    }
}

impl From<&Money> for Operand {
    fn from(money: &Money) -> Self {
        Self::Money(*money)
    }
}

impl From<Decimal> for Operand {
    fn from(number: Decimal) -> Self {
        Self::Number(number)
    }
}

macro_rules! integer_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(number: $ty) -> Self {
                    Self::Number(Decimal::from(number))
                }
            }
        )*
    };
}

integer_operand!(i32, i64, u32, u64);

impl TryFrom<f64> for Operand {
    type Error = MoneyError;

    fn try_from(_: f64) -> Result<Self, Self::Error> {
        Err(MoneyError::UnsupportedOperand("f64".to_string()))
    }
}

impl TryFrom<f32> for Operand {
    type Error = MoneyError;

    fn try_from(_: f32) -> Result<Self, Self::Error> {
        Err(MoneyError::UnsupportedOperand("f32".to_string()))
    }
}

/// Parses `"12.5"` as a number or `"12.5 EUR"` as money.
impl FromStr for Operand {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(amount), None, None) => amount
                .parse::<Decimal>()
                .map(Self::Number)
                .map_err(|_| MoneyError::UnsupportedOperand(s.to_string())),
            (Some(amount), Some(currency), None) => Money::parse(amount, currency).map(Self::Money),
            _ => Err(MoneyError::UnsupportedOperand(s.to_string())),
        }
    }
}
