use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Day/night classification for a location at a point in time.
///
/// An unknown location yields no moment at all; callers carry that as
/// `Option<Moment>` and fall back to the dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Moment {
    Day,
    Night,
}

impl Moment {
    pub fn is_day(&self) -> bool {
        matches!(self, Self::Day)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

/// Weather-type categories mapped from CWB weather codes.
///
/// These are the seven coarse tags the icon set is drawn in. A code that
/// matches none of them classifies to `None`; the display default is `Clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherKind {
    #[default]
    Clear,
    Thunderstorm,
    CloudyFog,
    Cloudy,
    Fog,
    PartiallyClearWithRain,
    Snowing,
}

impl WeatherKind {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Thunderstorm => "Thunderstorm",
            Self::CloudyFog => "Cloudy with Fog",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::PartiallyClearWithRain => "Partially Clear with Rain",
            Self::Snowing => "Snowing",
        }
    }
}

/// Current observed conditions from a weather station
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub station: String,
    /// Air temperature in °C
    pub temperature: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Relative humidity, 0.0-1.0
    pub humidity: f64,
    /// Observation time as reported by the station (local wall clock)
    pub observed_at: String,
}

/// One slice of the 36-hour city forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastElement {
    /// Weather phenomenon description (e.g. "多雲時晴")
    pub description: String,
    /// Numeric weather code backing the description; feeds the classifier
    pub weather_code: u16,
    /// Probability of precipitation in percent
    pub rain_probability: f64,
    /// Comfort index description (e.g. "舒適")
    pub comfort: String,
}

/// Complete weather bundle for one city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub current: CurrentWeather,
    pub forecast: ForecastElement,
}

/// Sunrise/sunset table errors
#[derive(Debug, thiserror::Error)]
pub enum SunTableError {
    #[error("Failed to parse sun table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to read sun table: {0}")]
    Io(#[from] std::io::Error),
    #[error("Duplicate entry for {location} on {date}")]
    DuplicateEntry { location: String, date: NaiveDate },
    #[error("Invalid date '{value}' for {location}")]
    InvalidDate { location: String, value: String },
    #[error("Invalid time '{value}' for {location}")]
    InvalidTime { location: String, value: String },
}

/// Moment resolution errors
#[derive(Debug, thiserror::Error)]
pub enum MomentError {
    /// The location is known but the table has no entry for today's date.
    /// Usually means the shipped table is stale.
    #[error("No sunrise/sunset entry for {location} on {date}")]
    MissingDailyEntry { location: String, date: NaiveDate },
}

/// Weather-code table errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherTableError {
    #[error("Weather code {code} listed under both {first:?} and {second:?}")]
    OverlappingCode {
        code: u16,
        first: WeatherKind,
        second: WeatherKind,
    },
}

/// Weather fetch errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("No records returned for {0}")]
    NoRecords(String),
    #[error("Missing weather element: {0}")]
    MissingElement(String),
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moment_as_str() {
        assert_eq!(Moment::Day.as_str(), "day");
        assert_eq!(Moment::Night.as_str(), "night");
        assert!(Moment::Day.is_day());
        assert!(!Moment::Night.is_day());
    }

    #[test]
    fn test_weather_kind_default_is_clear() {
        assert_eq!(WeatherKind::default(), WeatherKind::Clear);
    }

    #[test]
    fn test_weather_kind_description() {
        assert_eq!(WeatherKind::Clear.description(), "Clear");
        assert_eq!(
            WeatherKind::PartiallyClearWithRain.description(),
            "Partially Clear with Rain"
        );
    }
}
