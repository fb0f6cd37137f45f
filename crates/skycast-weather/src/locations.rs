//! Supported city lookup table.
//!
//! Each city needs three names: the forecast API keys off the administrative
//! city name, the observation API keys off a weather station, and the
//! sunrise/sunset table keys off its own location name. This table ties them
//! together.

/// Name mappings for one supported city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityInfo {
    /// Administrative city name shown to the user and sent to the 36h
    /// forecast endpoint (e.g. "臺北市")
    pub city_name: &'static str,
    /// Observation station queried for current conditions (e.g. "臺北")
    pub station: &'static str,
    /// Key into the sunrise/sunset table
    pub sun_table_key: &'static str,
}

const CITIES: &[CityInfo] = &[
    CityInfo { city_name: "基隆市", station: "基隆", sun_table_key: "基隆市" },
    CityInfo { city_name: "臺北市", station: "臺北", sun_table_key: "臺北市" },
    CityInfo { city_name: "新北市", station: "板橋", sun_table_key: "新北市" },
    CityInfo { city_name: "桃園市", station: "新屋", sun_table_key: "桃園市" },
    CityInfo { city_name: "新竹市", station: "新竹", sun_table_key: "新竹市" },
    CityInfo { city_name: "苗栗縣", station: "三義", sun_table_key: "苗栗縣" },
    CityInfo { city_name: "臺中市", station: "臺中", sun_table_key: "臺中市" },
    CityInfo { city_name: "彰化縣", station: "彰師大", sun_table_key: "彰化縣" },
    CityInfo { city_name: "嘉義市", station: "嘉義", sun_table_key: "嘉義市" },
    CityInfo { city_name: "臺南市", station: "臺南", sun_table_key: "臺南市" },
    CityInfo { city_name: "高雄市", station: "高雄", sun_table_key: "高雄市" },
    CityInfo { city_name: "屏東縣", station: "恆春", sun_table_key: "屏東縣" },
    CityInfo { city_name: "宜蘭縣", station: "宜蘭", sun_table_key: "宜蘭縣" },
    CityInfo { city_name: "花蓮縣", station: "花蓮", sun_table_key: "花蓮縣" },
    CityInfo { city_name: "臺東縣", station: "臺東", sun_table_key: "臺東縣" },
    CityInfo { city_name: "澎湖縣", station: "澎湖", sun_table_key: "澎湖縣" },
];

/// Look up a city by its administrative name (exact match).
pub fn find_location(city_name: &str) -> Option<&'static CityInfo> {
    CITIES.iter().find(|city| city.city_name == city_name)
}

/// All supported city names, in table order.
pub fn supported_cities() -> impl Iterator<Item = &'static str> {
    CITIES.iter().map(|city| city.city_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_taipei() {
        let city = find_location("臺北市").unwrap();
        assert_eq!(city.station, "臺北");
        assert_eq!(city.sun_table_key, "臺北市");
    }

    #[test]
    fn test_unknown_city_is_none() {
        assert!(find_location("東京都").is_none());
        assert!(find_location("").is_none());
    }

    #[test]
    fn test_city_names_are_unique() {
        let mut names: Vec<_> = supported_cities().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
