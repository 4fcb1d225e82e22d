use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Forecast, ParseInstantError};

pub mod seventimer;

pub use seventimer::SevenTimer;

/// Everything that can go wrong between issuing the request and holding a
/// decoded [`Forecast`]. Callers catch this at the request boundary and fall
/// back to the no-forecast state; it never propagates further.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach forecast provider: {0}")]
    Request(#[from] reqwest::Error),

    #[error("forecast provider returned status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("failed to parse forecast provider response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("forecast provider sent an unusable init timestamp: {0}")]
    BadInit(#[from] ParseInstantError),
}

/// The seam between the app and whatever serves forecasts for a coordinate
/// pair.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<Forecast, FetchError>;
}

/// Keeps provider error bodies readable in logs and messages.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let truncated: String = body.chars().take(MAX).collect();
        format!("{truncated}...")
    } else {
        body.to_string()
    }
}
