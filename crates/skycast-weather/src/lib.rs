//! Weather domain library for Skycast
//!
//! Provides the day/night moment resolver backed by a static sunrise/sunset
//! table, the weather-code classifier used for icon selection, the supported
//! city lookup table, and the Central Weather Bureau fetch client.

pub mod types;
pub mod codes;
pub mod suntable;
pub mod locations;
pub mod icons;
pub mod provider;

pub use types::*;
pub use codes::{classify_weather_code, validate_code_groups, WEATHER_CODE_GROUPS};
pub use suntable::SunMomentTable;
pub use locations::{find_location, supported_cities, CityInfo};
pub use icons::icon_for;
pub use provider::WeatherProvider;
