//! Property-based tests for rates and amount normalization.

use cambio_shared::Currency;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{AMOUNT_SCALE, normalize};
use super::exchange::ExchangeRateService;

/// Strategy to generate positive rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate signed amounts with up to 8 decimal places.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000_000i64..100_000_000_000_000i64).prop_map(|v| Decimal::new(v, 8))
}

fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Normalized amounts always carry exactly four decimal places and stay
    /// within half a unit of the last place.
    #[test]
    fn prop_normalize_scale_and_error(amount in any_amount()) {
        let normalized = normalize(amount);
        prop_assert_eq!(normalized.scale(), AMOUNT_SCALE);
        prop_assert!((normalized - amount).abs() <= Decimal::new(5, 5));
    }

    /// Normalizing twice is the same as normalizing once.
    #[test]
    fn prop_normalize_is_idempotent(amount in any_amount()) {
        prop_assert_eq!(normalize(normalize(amount)), normalize(amount));
    }

    /// A currency quoted against itself is always 1.
    #[test]
    fn prop_self_quotation_is_one(currency in any_currency(), rate in positive_rate()) {
        let service = ExchangeRateService::with_rates([(currency, rate)]);
        prop_assert_eq!(service.quotation(currency, currency).unwrap(), Decimal::ONE);
    }

    /// Quotation equals origin rate over target rate.
    #[test]
    fn prop_quotation_is_rate_ratio(
        origin_rate in positive_rate(),
        target_rate in positive_rate(),
    ) {
        let service = ExchangeRateService::with_rates([
            (Currency::Usd, origin_rate),
            (Currency::Eur, target_rate),
        ]);
        let quotation = service.quotation(Currency::Usd, Currency::Eur).unwrap();
        prop_assert_eq!(quotation, origin_rate / target_rate);
    }

    /// Opposite quotations multiply to one within decimal precision.
    #[test]
    fn prop_reverse_quotation_is_reciprocal(
        origin_rate in positive_rate(),
        target_rate in positive_rate(),
    ) {
        let service = ExchangeRateService::with_rates([
            (Currency::Gbp, origin_rate),
            (Currency::Nok, target_rate),
        ]);
        let forward = service.quotation(Currency::Gbp, Currency::Nok).unwrap();
        let back = service.quotation(Currency::Nok, Currency::Gbp).unwrap();
        let product = forward * back;
        prop_assert!((product - Decimal::ONE).abs() < Decimal::new(1, 15));
    }

    /// Any pair with a missing side has no quotation.
    #[test]
    fn prop_missing_rate_has_no_quotation(
        known in any_currency(),
        other in any_currency(),
        rate in positive_rate(),
    ) {
        prop_assume!(known != other);
        let service = ExchangeRateService::with_rates([(known, rate)]);
        prop_assert!(service.quotation(known, other).is_err());
        prop_assert!(service.quotation(other, known).is_err());
    }
}
