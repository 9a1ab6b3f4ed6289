//! ISO 4217 currency codes.
//!
//! The set is closed: a `Currency` value is always a recognized member.
//! Codes coming from text (configuration, user input) are validated through
//! [`FromStr`](std::str::FromStr) or [`Currency::is_member`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currencies supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Polish Zloty
    Pln,
    /// Czech Koruna
    Czk,
    /// Danish Krone
    Dkk,
    /// Euro
    Eur,
    /// Pound Sterling
    Gbp,
    /// Norwegian Krone
    Nok,
    /// US Dollar
    Usd,
    /// South African Rand
    Zar,
}

/// Returned when a currency code is not a member of [`Currency`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

impl Currency {
    /// Every supported currency, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Pln,
        Self::Czk,
        Self::Dkk,
        Self::Eur,
        Self::Gbp,
        Self::Nok,
        Self::Usd,
        Self::Zar,
    ];

    /// Returns the upper-case ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pln => "PLN",
            Self::Czk => "CZK",
            Self::Dkk => "DKK",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Nok => "NOK",
            Self::Usd => "USD",
            Self::Zar => "ZAR",
        }
    }

    /// Returns true if `code` names a supported currency (case-insensitive).
    #[must_use]
    pub fn is_member(code: &str) -> bool {
        code.parse::<Self>().is_ok()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == upper)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}
