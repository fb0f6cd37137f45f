//! Weather-code classification.
//!
//! The CWB forecast reports a numeric weather code alongside its textual
//! description; the icon set only distinguishes seven coarse categories, so
//! each code is bucketed into a [`WeatherKind`] via a static table.

use std::collections::HashMap;

use crate::types::{WeatherKind, WeatherTableError};

/// Weather codes grouped by category, in the source data's order.
///
/// The groups are expected to be pairwise disjoint; that is a property of the
/// data, not the code, so [`validate_code_groups`] checks it at startup.
pub const WEATHER_CODE_GROUPS: &[(WeatherKind, &[u16])] = &[
    (
        WeatherKind::Thunderstorm,
        &[15, 16, 17, 18, 21, 22, 33, 34, 35, 36, 41],
    ),
    (WeatherKind::Clear, &[1]),
    (WeatherKind::CloudyFog, &[25, 26, 27, 28]),
    (WeatherKind::Cloudy, &[2, 3, 4, 5, 6, 7]),
    (WeatherKind::Fog, &[24]),
    (
        WeatherKind::PartiallyClearWithRain,
        &[8, 9, 10, 11, 12, 13, 14, 19, 20, 29, 30, 31, 32, 38, 39],
    ),
    (WeatherKind::Snowing, &[23, 37, 42]),
];

/// Classify a weather code into its display category.
///
/// Returns `None` when no group lists the code; the caller applies the
/// `Clear` display default.
pub fn classify_weather_code(code: u16) -> Option<WeatherKind> {
    classify_in(WEATHER_CODE_GROUPS, code)
}

/// Scan the whole table and keep the last group containing the code.
///
/// With disjoint groups this is indistinguishable from first-match, but if a
/// code were ever listed twice the later group wins. That matches the
/// upstream data's established resolution order and must not be changed to
/// an early return.
fn classify_in(groups: &[(WeatherKind, &[u16])], code: u16) -> Option<WeatherKind> {
    let mut matched = None;
    for (kind, codes) in groups {
        if codes.contains(&code) {
            matched = Some(*kind);
        }
    }
    matched
}

/// Check that no weather code appears under two categories.
///
/// Run once at startup; a violation means the table data was edited
/// inconsistently and the last-match resolution would silently pick a winner.
pub fn validate_code_groups() -> Result<(), WeatherTableError> {
    validate_groups(WEATHER_CODE_GROUPS)
}

fn validate_groups(groups: &[(WeatherKind, &[u16])]) -> Result<(), WeatherTableError> {
    let mut seen: HashMap<u16, WeatherKind> = HashMap::new();
    for (kind, codes) in groups {
        for &code in *codes {
            if let Some(first) = seen.insert(code, *kind) {
                return Err(WeatherTableError::OverlappingCode {
                    code,
                    first,
                    second: *kind,
                });
            }
        }
    }
    Ok(())
}
