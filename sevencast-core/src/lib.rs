//! Core library for the `sevencast` CLI.
//!
//! This crate defines:
//! - The city catalog (coordinates keyed by city and country)
//! - The forecast provider seam and the 7timer civil client
//! - Aggregation of raw timepoints into daily summaries
//! - Condition-to-icon resolution
//! - Persisted display configuration
//!
//! It is used by `sevencast-cli`, but can also be reused by other binaries or
//! services.

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod icons;
pub mod model;
pub mod provider;

pub use aggregate::{AggregateError, MAX_DAYS, daily_summaries};
pub use catalog::{CatalogError, CityCatalog, CityRecord};
pub use config::Config;
pub use icons::resolve_icon;
pub use model::{BaseInstant, DailySummary, Forecast, RawForecastPoint, to_fahrenheit};
pub use provider::{FetchError, ForecastProvider, SevenTimer};
