//! Central Weather Bureau open-data client.
//!
//! Two independent datastores feed the dashboard: `O-A0003-001` (current
//! station observations) and `F-C0032-001` (36-hour city forecast). Payloads
//! get presence checks only; anything present is taken at face value.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::locations::CityInfo;
use crate::types::{CurrentWeather, FetchError, ForecastElement, WeatherReport};

const CWB_BASE_URL: &str = "https://opendata.cwb.gov.tw/api/v1/rest/datastore";
const OBSERVATION_DATASET: &str = "O-A0003-001";
const FORECAST_DATASET: &str = "F-C0032-001";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "Skycast/0.1.0 (https://github.com/skycast)";

#[derive(Debug, Deserialize)]
struct ObservationResponse {
    records: ObservationRecords,
}

#[derive(Debug, Deserialize)]
struct ObservationRecords {
    #[serde(default)]
    location: Vec<ObservationLocation>,
}

#[derive(Debug, Deserialize)]
struct ObservationLocation {
    #[serde(rename = "locationName")]
    location_name: String,
    time: ObservationTime,
    #[serde(rename = "weatherElement", default)]
    weather_element: Vec<ObservationElement>,
}

#[derive(Debug, Deserialize)]
struct ObservationTime {
    #[serde(rename = "obsTime")]
    obs_time: String,
}

#[derive(Debug, Deserialize)]
struct ObservationElement {
    #[serde(rename = "elementName")]
    element_name: String,
    #[serde(rename = "elementValue")]
    element_value: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    records: ForecastRecords,
}

#[derive(Debug, Deserialize)]
struct ForecastRecords {
    #[serde(default)]
    location: Vec<ForecastLocation>,
}

#[derive(Debug, Deserialize)]
struct ForecastLocation {
    #[serde(rename = "weatherElement", default)]
    weather_element: Vec<ForecastWeatherElement>,
}

#[derive(Debug, Deserialize)]
struct ForecastWeatherElement {
    #[serde(rename = "elementName")]
    element_name: String,
    #[serde(default)]
    time: Vec<ForecastTime>,
}

#[derive(Debug, Deserialize)]
struct ForecastTime {
    parameter: ForecastParameter,
}

#[derive(Debug, Clone, Deserialize)]
struct ForecastParameter {
    #[serde(rename = "parameterName")]
    parameter_name: String,
    #[serde(rename = "parameterValue")]
    parameter_value: Option<String>,
}

/// Client for the CWB open-data API.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
    authorization: String,
}

impl WeatherProvider {
    /// Create a provider against the production CWB endpoint.
    pub fn new(authorization: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_base_url(authorization, CWB_BASE_URL)
    }

    /// Create a provider against a custom endpoint (used by tests).
    pub fn with_base_url(
        authorization: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            authorization: authorization.into(),
        })
    }

    /// Fetch current conditions from a weather station.
    pub async fn fetch_current(&self, station: &str) -> Result<CurrentWeather, FetchError> {
        let url = format!("{}/{}", self.base_url, OBSERVATION_DATASET);
        tracing::debug!("Fetching observation for station {}", station);

        let body: ObservationResponse = self
            .client
            .get(&url)
            .query(&[
                ("Authorization", self.authorization.as_str()),
                ("locationName", station),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let location = body
            .records
            .location
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NoRecords(station.to_string()))?;

        Ok(CurrentWeather {
            temperature: element_f64(&location.weather_element, "TEMP")?,
            wind_speed: element_f64(&location.weather_element, "WDSD")?,
            humidity: element_f64(&location.weather_element, "HUMD")?,
            observed_at: location.time.obs_time,
            station: location.location_name,
        })
    }

    /// Fetch the first slice of the 36-hour forecast for a city.
    pub async fn fetch_forecast(&self, city_name: &str) -> Result<ForecastElement, FetchError> {
        let url = format!("{}/{}", self.base_url, FORECAST_DATASET);
        tracing::debug!("Fetching forecast for {}", city_name);

        let body: ForecastResponse = self
            .client
            .get(&url)
            .query(&[
                ("Authorization", self.authorization.as_str()),
                ("locationName", city_name),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let location = body
            .records
            .location
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NoRecords(city_name.to_string()))?;

        // Wx carries the description in parameterName and the numeric
        // weather code in parameterValue.
        let wx = first_parameter(&location.weather_element, "Wx")?;
        let code_text = wx
            .parameter_value
            .as_deref()
            .ok_or_else(|| FetchError::MissingElement("Wx parameterValue".to_string()))?;
        let weather_code = code_text
            .parse::<u16>()
            .map_err(|_| FetchError::Malformed(format!("weather code '{code_text}'")))?;

        let pop = first_parameter(&location.weather_element, "PoP")?;
        let rain_probability = pop
            .parameter_name
            .parse::<f64>()
            .map_err(|_| FetchError::Malformed(format!("PoP '{}'", pop.parameter_name)))?;

        let ci = first_parameter(&location.weather_element, "CI")?;

        Ok(ForecastElement {
            description: wx.parameter_name,
            weather_code,
            rain_probability,
            comfort: ci.parameter_name,
        })
    }

    /// Fetch observation and forecast concurrently and bundle them.
    ///
    /// The two requests are independent; either failure fails the report.
    pub async fn fetch_report(&self, city: &CityInfo) -> Result<WeatherReport, FetchError> {
        let (current, forecast) = tokio::try_join!(
            self.fetch_current(city.station),
            self.fetch_forecast(city.city_name)
        )?;

        tracing::info!("Fetched weather report for {}", city.city_name);
        Ok(WeatherReport {
            city: city.city_name.to_string(),
            current,
            forecast,
        })
    }
}

fn element_f64(elements: &[ObservationElement], name: &str) -> Result<f64, FetchError> {
    let element = elements
        .iter()
        .find(|element| element.element_name == name)
        .ok_or_else(|| FetchError::MissingElement(name.to_string()))?;
    element
        .element_value
        .parse::<f64>()
        .map_err(|_| FetchError::Malformed(format!("{name} '{}'", element.element_value)))
}

fn first_parameter(
    elements: &[ForecastWeatherElement],
    name: &str,
) -> Result<ForecastParameter, FetchError> {
    elements
        .iter()
        .find(|element| element.element_name == name)
        .and_then(|element| element.time.first())
        .map(|slice| slice.parameter.clone())
        .ok_or_else(|| FetchError::MissingElement(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::find_location;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn observation_body() -> serde_json::Value {
        json!({
            "records": {
                "location": [{
                    "locationName": "臺北",
                    "time": { "obsTime": "2024-01-01 12:00:00" },
                    "weatherElement": [
                        { "elementName": "WDSD", "elementValue": "1.10" },
                        { "elementName": "TEMP", "elementValue": "18.30" },
                        { "elementName": "HUMD", "elementValue": "0.81" }
                    ]
                }]
            }
        })
    }

    fn forecast_body() -> serde_json::Value {
        json!({
            "records": {
                "location": [{
                    "locationName": "臺北市",
                    "weatherElement": [
                        {
                            "elementName": "Wx",
                            "time": [{
                                "parameter": { "parameterName": "陰短暫雨", "parameterValue": "11" }
                            }]
                        },
                        {
                            "elementName": "PoP",
                            "time": [{
                                "parameter": { "parameterName": "70", "parameterUnit": "百分比" }
                            }]
                        },
                        {
                            "elementName": "CI",
                            "time": [{
                                "parameter": { "parameterName": "寒冷" }
                            }]
                        }
                    ]
                }]
            }
        })
    }

    #[tokio::test]
    async fn test_fetch_current_parses_elements() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/{OBSERVATION_DATASET}")))
            .and(query_param("locationName", "臺北"))
            .respond_with(ResponseTemplate::new(200).set_body_json(observation_body()))
            .mount(&server)
            .await;

        let provider = WeatherProvider::with_base_url("test-key", server.uri()).unwrap();
        let current = provider.fetch_current("臺北").await.unwrap();

        assert_eq!(current.station, "臺北");
        assert_eq!(current.temperature, 18.30);
        assert_eq!(current.wind_speed, 1.10);
        assert_eq!(current.humidity, 0.81);
        assert_eq!(current.observed_at, "2024-01-01 12:00:00");
    }

    #[tokio::test]
    async fn test_fetch_forecast_parses_first_slice() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/{FORECAST_DATASET}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .mount(&server)
            .await;

        let provider = WeatherProvider::with_base_url("test-key", server.uri()).unwrap();
        let forecast = provider.fetch_forecast("臺北市").await.unwrap();

        assert_eq!(forecast.description, "陰短暫雨");
        assert_eq!(forecast.weather_code, 11);
        assert_eq!(forecast.rain_probability, 70.0);
        assert_eq!(forecast.comfort, "寒冷");
    }

    #[tokio::test]
    async fn test_fetch_report_combines_both() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/{OBSERVATION_DATASET}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(observation_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/{FORECAST_DATASET}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .mount(&server)
            .await;

        let provider = WeatherProvider::with_base_url("test-key", server.uri()).unwrap();
        let city = find_location("臺北市").unwrap();
        let report = provider.fetch_report(city).await.unwrap();

        assert_eq!(report.city, "臺北市");
        assert_eq!(report.current.station, "臺北");
        assert_eq!(report.forecast.weather_code, 11);
    }

    #[tokio::test]
    async fn test_empty_records_is_no_records_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/{OBSERVATION_DATASET}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "records": { "location": [] } })),
            )
            .mount(&server)
            .await;

        let provider = WeatherProvider::with_base_url("test-key", server.uri()).unwrap();
        let err = provider.fetch_current("臺北").await.unwrap_err();
        assert!(matches!(err, FetchError::NoRecords(_)));
    }

    #[tokio::test]
    async fn test_missing_element_reported_by_name() {
        let server = MockServer::start().await;
        let body = json!({
            "records": {
                "location": [{
                    "locationName": "臺北",
                    "time": { "obsTime": "2024-01-01 12:00:00" },
                    "weatherElement": [
                        { "elementName": "TEMP", "elementValue": "18.30" }
                    ]
                }]
            }
        });
        Mock::given(method("GET"))
            .and(path(format!("/{OBSERVATION_DATASET}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let provider = WeatherProvider::with_base_url("test-key", server.uri()).unwrap();
        let err = provider.fetch_current("臺北").await.unwrap_err();
        match err {
            FetchError::MissingElement(name) => assert_eq!(name, "WDSD"),
            other => panic!("expected MissingElement, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_surfaces_as_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/{FORECAST_DATASET}")))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let provider = WeatherProvider::with_base_url("test-key", server.uri()).unwrap();
        let err = provider.fetch_forecast("臺北市").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
