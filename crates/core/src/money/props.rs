//! Property-based tests for `Money`.

use cambio_shared::Currency;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{Money, MoneyError};
use crate::currency::{AMOUNT_SCALE, ExchangeContext, ExchangeRateService};

/// Strategy to generate signed amounts (-1,000,000.000000 to 1,000,000.000000).
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|v| Decimal::new(v, 6))
}

/// Strategy to generate rates between 0.01 and 100.00.
fn moderate_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000i64).prop_map(|v| Decimal::new(v, 2))
}

fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

fn distinct_pair() -> impl Strategy<Value = (Currency, Currency)> {
    (any_currency(), any_currency()).prop_filter("distinct currencies", |(a, b)| a != b)
}

fn rates_for(pairs: &[(Currency, Decimal)]) -> ExchangeRateService {
    ExchangeRateService::with_rates(pairs.iter().copied())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Construction keeps the currency and exposes a four-place amount.
    #[test]
    fn prop_construction_keeps_currency_and_scale(
        amount in any_amount(),
        currency in any_currency(),
    ) {
        let money = Money::new(amount, currency);
        prop_assert_eq!(money.currency(), currency);
        prop_assert_eq!(money.amount().scale(), AMOUNT_SCALE);
        prop_assert_eq!(money.raw_amount(), amount);
    }

    /// Unknown codes never construct money.
    #[test]
    fn prop_unknown_code_is_invalid_currency(code in "[A-Z]{3}") {
        prop_assume!(!Currency::is_member(&code));
        prop_assert_eq!(
            Money::parse("1", &code),
            Err(MoneyError::InvalidCurrency(code.clone()))
        );
    }

    /// Converting into the own currency is the identity, even without rates.
    #[test]
    fn prop_identity_conversion(amount in any_amount(), currency in any_currency()) {
        let money = Money::new(amount, currency);
        let rates = ExchangeRateService::new();
        prop_assert_eq!(money.convert_to(Some(currency), &rates).unwrap(), money);
        prop_assert_eq!(money.convert_to(None, &rates).unwrap(), money);
    }

    /// Converting there and back lands within rounding distance of the start.
    #[test]
    fn prop_round_trip_within_tolerance(
        amount in any_amount(),
        (from, to) in distinct_pair(),
        from_rate in moderate_rate(),
        to_rate in moderate_rate(),
    ) {
        let rates = rates_for(&[(from, from_rate), (to, to_rate)]);
        let money = Money::new(amount, from);

        let there = money.convert_to(Some(to), &rates).unwrap();
        let back = there.convert_to(Some(from), &rates).unwrap();

        // One rounding of the intermediate amount scaled by the return
        // quotation, plus one final rounding.
        let unit = Decimal::new(1, AMOUNT_SCALE);
        let tolerance = unit * (Decimal::ONE + from_rate.max(to_rate) / from_rate.min(to_rate));
        prop_assert_eq!(back.currency(), from);
        prop_assert!(
            (back.amount() - money.amount()).abs() <= tolerance,
            "{} -> {} -> {}", money, there, back
        );
    }

    /// Adding a number sums the normalized amount with the number.
    #[test]
    fn prop_add_number(amount in any_amount(), other in any_amount(), currency in any_currency()) {
        let context = ExchangeContext::default();
        let money = Money::new(amount, currency);
        let sum = money.add(other, &context).unwrap();
        prop_assert_eq!(sum.currency(), currency);
        prop_assert_eq!(sum.raw_amount(), money.amount() + other);
    }

    /// Subtracting a value from itself is zero.
    #[test]
    fn prop_subtract_self_is_zero(amount in any_amount(), currency in any_currency()) {
        let context = ExchangeContext::default();
        let money = Money::new(amount, currency);
        prop_assert!(money.subtract(money, &context).unwrap().is_zero());
    }

    /// Addition honours the target currency; subtraction never does.
    #[test]
    fn prop_target_applies_to_addition_only(
        amount in any_amount(),
        (from, to) in distinct_pair(),
        from_rate in moderate_rate(),
        to_rate in moderate_rate(),
    ) {
        let mut context = ExchangeContext::new(rates_for(&[(from, from_rate), (to, to_rate)]));
        let money = Money::new(amount, from);
        let expected = money
            .add(money, &context)
            .and_then(|sum| sum.convert_to(Some(to), context.rates()))
            .unwrap();

        let scope = context.with_target(to);
        prop_assert_eq!(money.add(money, &scope).unwrap(), expected);
        prop_assert_eq!(money.subtract(money, &scope).unwrap().currency(), from);
    }

    /// Negation and absolute value keep the currency and mirror the amount.
    #[test]
    fn prop_negation_and_abs(amount in any_amount(), currency in any_currency()) {
        let money = Money::new(amount, currency);
        prop_assert_eq!(-(-money), money);
        prop_assert_eq!((-money).abs(), money.abs());
        prop_assert!(!money.abs().is_negative());
        prop_assert_eq!((-money).currency(), currency);
    }
}
