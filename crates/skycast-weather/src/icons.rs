//! Icon selection: map a (moment, weather kind) pair to an icon resource.
//!
//! The icon set has one asset per category in a day and a night variant.
//! Defaults mirror the display layer's behavior: an unclassified code shows
//! the clear icon, and an unknown moment uses the night set.

use crate::types::{Moment, WeatherKind};

/// Pick the icon resource name for the given moment and weather category.
pub fn icon_for(moment: Option<Moment>, kind: Option<WeatherKind>) -> &'static str {
    let kind = kind.unwrap_or_default();
    match moment {
        Some(Moment::Day) => day_icon(kind),
        Some(Moment::Night) | None => night_icon(kind),
    }
}

fn day_icon(kind: WeatherKind) -> &'static str {
    match kind {
        WeatherKind::Thunderstorm => "day-thunderstorm",
        WeatherKind::Clear => "day-clear",
        WeatherKind::CloudyFog => "day-cloudy-fog",
        WeatherKind::Cloudy => "day-cloudy",
        WeatherKind::Fog => "day-fog",
        WeatherKind::PartiallyClearWithRain => "day-partially-clear-with-rain",
        WeatherKind::Snowing => "day-snowing",
    }
}

fn night_icon(kind: WeatherKind) -> &'static str {
    match kind {
        WeatherKind::Thunderstorm => "night-thunderstorm",
        WeatherKind::Clear => "night-clear",
        WeatherKind::CloudyFog => "night-cloudy-fog",
        WeatherKind::Cloudy => "night-cloudy",
        WeatherKind::Fog => "night-fog",
        WeatherKind::PartiallyClearWithRain => "night-partially-clear-with-rain",
        WeatherKind::Snowing => "night-snowing",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_and_night_variants() {
        assert_eq!(
            icon_for(Some(Moment::Day), Some(WeatherKind::Thunderstorm)),
            "day-thunderstorm"
        );
        assert_eq!(
            icon_for(Some(Moment::Night), Some(WeatherKind::Thunderstorm)),
            "night-thunderstorm"
        );
    }

    #[test]
    fn test_unclassified_code_shows_clear() {
        assert_eq!(icon_for(Some(Moment::Day), None), "day-clear");
    }

    #[test]
    fn test_unknown_moment_uses_night_set() {
        assert_eq!(icon_for(None, Some(WeatherKind::Fog)), "night-fog");
        assert_eq!(icon_for(None, None), "night-clear");
    }
}
