//! Client for the 7timer civil product.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{FetchError, ForecastProvider, truncate_body};
use crate::model::{BaseInstant, Forecast, RawForecastPoint};

pub const DEFAULT_BASE_URL: &str = "http://www.7timer.info/bin/api.pl";

#[derive(Debug, Clone)]
pub struct SevenTimer {
    http: Client,
    base_url: String,
}

impl SevenTimer {
    /// No request timeout is configured; a stalled provider stalls the call.
    pub fn new() -> Self {
        Self { http: Client::new(), base_url: DEFAULT_BASE_URL.to_string() }
    }

    /// Points the client at a different endpoint, mainly for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for SevenTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of the civil product: the timepoints plus the base instant
/// they are relative to. Other response fields are ignored.
#[derive(Debug, Deserialize)]
struct CivilResponse {
    init: String,
    dataseries: Vec<RawForecastPoint>,
}

#[async_trait]
impl ForecastProvider for SevenTimer {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<Forecast, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("lon", longitude.to_string()),
                ("lat", latitude.to_string()),
                ("product", "civil".to_string()),
                ("output", "json".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: CivilResponse = serde_json::from_str(&body)?;
        let base = BaseInstant::parse(&parsed.init)?;

        tracing::debug!(
            init = %parsed.init,
            points = parsed.dataseries.len(),
            "fetched civil forecast"
        );

        Ok(Forecast { base, points: parsed.dataseries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Trimmed-down civil payload; real responses carry more fields per point,
    // which the decoder ignores.
    const CIVIL_BODY: &str = r#"{
        "product": "civil",
        "init": "2024061512",
        "dataseries": [
            {"timepoint": 3, "cloudcover": 2, "temp2m": 25, "weather": "pcloudy"},
            {"timepoint": 6, "cloudcover": 9, "temp2m": 21, "weather": "rainnight"}
        ]
    }"#;

    fn provider_for(server: &MockServer) -> SevenTimer {
        SevenTimer::new().with_base_url(format!("{}/bin/api.pl", server.uri()))
    }

    #[tokio::test]
    async fn fetches_and_decodes_a_civil_forecast() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bin/api.pl"))
            .and(query_param("lon", "-0.13"))
            .and(query_param("lat", "51.51"))
            .and(query_param("product", "civil"))
            .and(query_param("output", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(CIVIL_BODY, "application/json"))
            .mount(&server)
            .await;

        let forecast = provider_for(&server).fetch(51.51, -0.13).await.expect("fetch");

        assert_eq!(forecast.base, BaseInstant::parse("2024061512").unwrap());
        assert_eq!(forecast.points.len(), 2);
        assert_eq!(forecast.points[0].temp2m, Some(25.0));
        assert_eq!(forecast.points[1].weather, "rainnight");
    }

    #[tokio::test]
    async fn non_success_status_is_reported_with_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
            .mount(&server)
            .await;

        let err = provider_for(&server).fetch(51.51, -0.13).await.unwrap_err();

        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "backend exploded");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_a_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = provider_for(&server).fetch(51.51, -0.13).await.unwrap_err();
        assert!(matches!(err, FetchError::Json(_)));
    }

    #[tokio::test]
    async fn unusable_init_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"init": "not-a-time", "dataseries": []}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let err = provider_for(&server).fetch(51.51, -0.13).await.unwrap_err();
        assert!(matches!(err, FetchError::BadInit(_)));
    }
}
