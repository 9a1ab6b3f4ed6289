//! Application configuration management.
//!
//! Sources are layered in order: `config/default`, `config/{RUN_MODE}`, then
//! `CAMBIO__*` environment variables (for example
//! `CAMBIO__RATES__TABLE__EUR=0.9`).
//!
//! Environment keys arrive lower-cased. Rate overrides are matched against
//! the file table case-insensitively so they replace the file entry instead
//! of sitting next to it.

use std::collections::HashMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Exchange rate seed data.
    #[serde(default)]
    pub rates: RatesConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Exchange rate seed data.
///
/// Each rate is the value of one unit of the currency relative to an
/// implicit base.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Base currency code. Receives a rate of 1 when the table omits it.
    #[serde(default = "default_base")]
    pub base: String,
    /// Currency code to rate.
    #[serde(default)]
    pub table: HashMap<String, Decimal>,
}

fn default_base() -> String {
    Currency::Usd.code().to_string()
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            table: HashMap::new(),
        }
    }
}

impl RatesConfig {
    /// Parses the configured base currency.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the code is not a supported currency.
    pub fn base_currency(&self) -> AppResult<Currency> {
        Ok(self.base.parse::<Currency>()?)
    }

    /// Replaces table entries with `overrides`, matching codes case-insensitively.
    pub fn apply_overrides(&mut self, overrides: HashMap<String, Decimal>) {
        for (code, rate) in overrides {
            self.table.retain(|key, _| !key.eq_ignore_ascii_case(&code));
            self.table.insert(code.to_ascii_uppercase(), rate);
        }
    }

    /// Validates every table entry, sorted by currency.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for an unknown code, a negative rate or
    /// a currency listed more than once.
    pub fn entries(&self) -> AppResult<Vec<(Currency, Decimal)>> {
        let mut entries = self
            .table
            .iter()
            .map(|(code, rate)| {
                let currency = code.parse::<Currency>()?;
                if rate.is_sign_negative() {
                    return Err(AppError::Validation(format!(
                        "Rate for {currency} cannot be negative: {rate}"
                    )));
                }
                Ok((currency, *rate))
            })
            .collect::<AppResult<Vec<_>>>()?;
        entries.sort_by_key(|(currency, _)| *currency);
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(AppError::Validation(format!(
                "Rate for {} is listed more than once",
                pair[0].0
            )));
        }
        Ok(entries)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "cambio=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `./config` and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        Self::load_from(Path::new("config"))
    }

    /// Loads configuration from files in `config_dir` and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load_from(config_dir: &Path) -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let environment = || {
            config::Environment::with_prefix("CAMBIO")
                .prefix_separator("__")
                .separator("__")
        };

        let config = config::Config::builder()
            .add_source(
                config::File::with_name(&config_dir.join("default").to_string_lossy())
                    .required(false),
            )
            .add_source(
                config::File::with_name(&config_dir.join(&run_mode).to_string_lossy())
                    .required(false),
            )
            .add_source(environment())
            .build()?;
        let mut app: Self = config.try_deserialize()?;

        let overrides: Self = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;
        app.rates.apply_overrides(overrides.rates.table);

        Ok(app)
    }

    /// Builds configuration from an in-memory TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or does not match
    /// the configuration shape.
    pub fn from_toml_str(toml: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
