//! Cambio quote tool.
//!
//! Converts an amount between currencies using the configured rate table.
//!
//! Usage: quote <AMOUNT> <FROM> <TO>
//!
//! Exits with the `AppError` exit code of the failure (65 for bad input,
//! 78 for configuration problems, 70 for internal failures) and 1 otherwise.

use std::process::ExitCode;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cambio_core::{ExchangeContext, ExchangeRateService, Money, MoneyError};
use cambio_shared::{AppConfig, AppError, Currency};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = app_error(&err).map_or("ERROR", AppError::error_code);
            eprintln!("{code}: {err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|err| AppError::Internal(format!("Failed to install logging: {err}")))?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [amount, from, to] = args.as_slice() else {
        return Err(AppError::Validation("usage: quote <AMOUNT> <FROM> <TO>".to_string()).into());
    };

    let money = Money::parse(amount, from).map_err(|err| AppError::Validation(err.to_string()))?;
    let target = to.parse::<Currency>().map_err(AppError::from)?;

    let rates = ExchangeRateService::from_config(&config.rates)?;
    info!(
        base = %config.rates.base,
        currencies = ?rates.currencies(),
        "Loaded exchange rates"
    );

    let context = ExchangeContext::new(rates);
    let converted = context.convert(money, target).map_err(conversion_error)?;
    info!(%money, %converted, "Converted");

    println!("{converted}");

    Ok(())
}

/// A missing rate is a gap in the configured table; anything else is the input.
fn conversion_error(err: MoneyError) -> AppError {
    match err {
        MoneyError::UnknownExchangeRate { .. } => AppError::Config(err.to_string()),
        _ => AppError::Validation(err.to_string()),
    }
}

fn app_error(err: &anyhow::Error) -> Option<&AppError> {
    err.chain().find_map(|cause| cause.downcast_ref::<AppError>())
}

fn exit_status(err: &anyhow::Error) -> u8 {
    app_error(err).map_or(1, AppError::exit_code)
}
