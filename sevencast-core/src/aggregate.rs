//! Groups raw forecast timepoints into per-day summaries.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::icons::resolve_icon;
use crate::model::{BaseInstant, DailySummary, RawForecastPoint};

/// At most this many day cards are produced per forecast.
pub const MAX_DAYS: usize = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    /// A point without a usable temperature aborts the whole call; partial
    /// cards are never produced.
    #[error("forecast point at timepoint {timepoint} has no usable temperature")]
    MissingTemperature { timepoint: u32 },
}

/// Folds an ordered sequence of raw points into at most [`MAX_DAYS`] daily
/// summaries.
///
/// Points are bucketed by their formatted date label, in order of first
/// appearance. The first point of a day fixes its condition and icon; later
/// points only widen the high/low range. An empty input yields an empty
/// output — the "no data" message is the renderer's concern.
pub fn daily_summaries(
    base: BaseInstant,
    points: &[RawForecastPoint],
) -> Result<Vec<DailySummary>, AggregateError> {
    let mut days: Vec<DailySummary> = Vec::new();

    for point in points {
        let temp = point
            .temp2m
            .filter(|t| t.is_finite())
            .ok_or(AggregateError::MissingTemperature { timepoint: point.timepoint })?;

        let label = date_label(base.plus_hours(point.timepoint));

        match days.iter_mut().find(|day| day.date_label == label) {
            Some(day) => {
                day.high_temp = day.high_temp.max(temp);
                day.low_temp = day.low_temp.min(temp);
            }
            None => days.push(DailySummary {
                date_label: label,
                high_temp: temp,
                low_temp: temp,
                condition: point.weather.clone(),
                icon: resolve_icon(&point.weather),
            }),
        }
    }

    // Points past the seventh day are still validated above; only the cards
    // are capped.
    days.truncate(MAX_DAYS);
    Ok(days)
}

/// Short date label, e.g. "Sat Jun 15". Label equality is the bucketing key.
fn date_label(instant: NaiveDateTime) -> String {
    instant.format("%a %b %-d").to_string()
}
