use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One timepoint of the provider's `dataseries`. Field names match the wire
/// format, so no serde renames are needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawForecastPoint {
    /// Hours elapsed since the forecast's base instant.
    pub timepoint: u32,
    /// 2m air temperature in Celsius. Absent on the wire for malformed points.
    pub temp2m: Option<f64>,
    /// Free-text condition code, e.g. "clear", "pcloudynight", "lightrain".
    pub weather: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseInstantError {
    #[error("init timestamp must be 10 digits (YYYYMMDDHH), got \"{0}\"")]
    Malformed(String),
    #[error("init timestamp \"{0}\" is not a valid calendar time")]
    OutOfRange(String),
}

/// The absolute instant the provider's timepoint offsets are relative to,
/// parsed from the 10-digit `init` field (`YYYYMMDDHH`, month 1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseInstant(NaiveDateTime);

impl BaseInstant {
    pub fn parse(s: &str) -> Result<Self, ParseInstantError> {
        if s.len() != 10 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseInstantError::Malformed(s.to_string()));
        }

        // Slices are digit-only, so the integer parses cannot fail.
        let year: i32 = s[0..4].parse().unwrap_or_default();
        let month: u32 = s[4..6].parse().unwrap_or_default();
        let day: u32 = s[6..8].parse().unwrap_or_default();
        let hour: u32 = s[8..10].parse().unwrap_or_default();

        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .map(BaseInstant)
            .ok_or_else(|| ParseInstantError::OutOfRange(s.to_string()))
    }

    pub fn instant(&self) -> NaiveDateTime {
        self.0
    }

    /// The absolute instant of a timepoint offset in hours.
    pub fn plus_hours(&self, hours: u32) -> NaiveDateTime {
        self.0 + Duration::hours(i64::from(hours))
    }
}

impl std::str::FromStr for BaseInstant {
    type Err = ParseInstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaseInstant::parse(s)
    }
}

impl std::fmt::Display for BaseInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d%H"))
    }
}

/// A decoded provider response: the base instant plus the raw timepoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub base: BaseInstant,
    pub points: Vec<RawForecastPoint>,
}

/// One rendered day card's worth of data. Built fresh per fetch, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    /// Short date label, e.g. "Sat Jun 15". Also the bucketing key.
    pub date_label: String,
    pub high_temp: f64,
    pub low_temp: f64,
    /// Condition text of the first point of the day, never revised.
    pub condition: String,
    pub icon: &'static str,
}

/// Derived display value; Celsius stays the source of truth.
pub fn to_fahrenheit(celsius: f64) -> i64 {
    (celsius * 9.0 / 5.0 + 32.0).round() as i64
}
