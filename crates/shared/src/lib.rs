//! Shared types, errors, and configuration for Cambio.
//!
//! This crate provides common types used across all other crates:
//! - The closed set of supported currencies
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LoggingConfig, RatesConfig};
pub use error::{AppError, AppResult};
pub use types::Currency;
