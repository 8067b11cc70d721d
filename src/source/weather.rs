//! Current-conditions weather source.
//!
//! The provider is an open-meteo-style forecast endpoint queried for a single
//! fixed coordinate (Yangon). The numeric WMO weather code in the payload is
//! mapped through total lookup functions into a description and a terminal
//! glyph; codes outside the table resolve to explicit defaults.
//!
//! Unlike the quote and news sources there is no fabricated fallback value:
//! when the fetch fails the widget shows an explicit unavailable notice.

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{Fallback, RemoteSource};

/// Note replacing the widget body when the fetch fails.
const UNAVAILABLE_NOTE: &str = "Weather data unavailable";

/// Yangon: 16.87 N, 96.20 E.
const FORECAST_QUERY: &str = "latitude=16.87&longitude=96.20&current=temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m&timezone=Asia%2FRangoon";

/// Normalized current conditions. `description` and `icon` always resolve
/// to a non-empty value via the total lookups below.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub wind_kmh: f64,
    pub description: &'static str,
    pub icon: &'static str,
    pub location: &'static str,
}

/// Wire shape of the provider payload (only the fields we read).
#[derive(Debug, Deserialize)]
struct ForecastPayload {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    apparent_temperature: f64,
    weather_code: u32,
    wind_speed_10m: f64,
}

/// WMO weather code → description. Ordered table with a default branch so
/// the function is total over all codes.
const WMO_DESCRIPTIONS: [(u32, &str); 28] = [
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snow fall"),
    (73, "Moderate snow fall"),
    (75, "Heavy snow fall"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Describe a WMO weather code. Total: unknown codes map to "Unknown".
pub fn describe(code: u32) -> &'static str {
    WMO_DESCRIPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, text)| *text)
        .unwrap_or("Unknown")
}

/// Terminal glyph for a WMO weather code. Total: unknown codes map to the
/// default cloud glyph.
pub fn icon(code: u32) -> &'static str {
    match code {
        0 => "☀",
        1..=3 => "⛅",
        45..=48 => "▒",
        51..=57 | 61..=67 | 80..=82 => "☂",
        71..=77 | 85..=86 => "❄",
        95..=99 => "⚡",
        _ => "☁",
    }
}

/// A current-conditions data source for one fixed location.
pub struct WeatherSource {
    /// Base forecast endpoint, without the query string.
    pub base_url: String,
}

impl WeatherSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full request URL with the fixed coordinate and variable list.
    pub fn request_url(&self) -> String {
        format!("{}?{}", self.base_url, FORECAST_QUERY)
    }

    /// Parse a provider payload into [`CurrentWeather`]. Pure, for tests.
    pub fn parse_payload(body: &str) -> Result<CurrentWeather> {
        let payload: ForecastPayload =
            serde_json::from_str(body).context("forecast payload missing current conditions")?;
        let current = payload.current;
        Ok(CurrentWeather {
            temperature_c: current.temperature_2m,
            feels_like_c: current.apparent_temperature,
            humidity_pct: current.relative_humidity_2m,
            wind_kmh: current.wind_speed_10m,
            description: describe(current.weather_code),
            icon: icon(current.weather_code),
            location: "Yangon",
        })
    }
}

impl RemoteSource for WeatherSource {
    type Output = CurrentWeather;

    fn name(&self) -> &str {
        "weather"
    }

    fn fetch(&self) -> Result<CurrentWeather> {
        let body = reqwest::blocking::get(self.request_url())?
            .error_for_status()?
            .text()?;
        Self::parse_payload(&body)
    }

    fn fallback(&self) -> Fallback<CurrentWeather> {
        Fallback::Unavailable(UNAVAILABLE_NOTE)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::load;

    #[test]
    fn describe_returns_documented_literals_for_table_codes() {
        for (code, text) in WMO_DESCRIPTIONS {
            assert_eq!(describe(code), text);
        }
    }

    #[test]
    fn describe_is_total_with_unknown_default() {
        for code in [4, 20, 44, 50, 60, 70, 90, 100, 255, 9999] {
            assert_eq!(describe(code), "Unknown");
        }
    }

    #[test]
    fn icon_covers_every_table_code() {
        for (code, _) in WMO_DESCRIPTIONS {
            assert_ne!(icon(code), "☁", "code {code} should have a specific glyph");
        }
    }

    #[test]
    fn icon_is_total_with_default_glyph() {
        for code in [4, 44, 58, 69, 79, 90, 100, 9999] {
            assert_eq!(icon(code), "☁");
        }
    }

    #[test]
    fn parse_payload_extracts_and_maps_all_fields() {
        let body = r#"{
            "current": {
                "temperature_2m": 31.4,
                "relative_humidity_2m": 74.0,
                "apparent_temperature": 36.2,
                "weather_code": 3,
                "wind_speed_10m": 12.5
            }
        }"#;
        let weather = WeatherSource::parse_payload(body).unwrap();
        assert_eq!(weather.temperature_c, 31.4);
        assert_eq!(weather.feels_like_c, 36.2);
        assert_eq!(weather.humidity_pct, 74.0);
        assert_eq!(weather.wind_kmh, 12.5);
        assert_eq!(weather.description, "Overcast");
        assert_eq!(weather.icon, "⛅");
        assert_eq!(weather.location, "Yangon");
    }

    #[test]
    fn unknown_code_still_yields_nonempty_description_and_icon() {
        let body = r#"{
            "current": {
                "temperature_2m": 20.0,
                "relative_humidity_2m": 50.0,
                "apparent_temperature": 20.0,
                "weather_code": 42,
                "wind_speed_10m": 1.0
            }
        }"#;
        let weather = WeatherSource::parse_payload(body).unwrap();
        assert_eq!(weather.description, "Unknown");
        assert_eq!(weather.icon, "☁");
    }

    #[test]
    fn missing_current_block_is_a_shape_failure() {
        assert!(WeatherSource::parse_payload(r#"{"hourly": {}}"#).is_err());
    }

    #[test]
    fn request_url_carries_fixed_coordinate() {
        let src = WeatherSource::new("http://example.test/v1/forecast");
        let url = src.request_url();
        assert!(url.contains("latitude=16.87"));
        assert!(url.contains("longitude=96.20"));
        assert!(url.contains("weather_code"));
    }

    #[test]
    fn transport_failure_yields_unavailable_state_without_data() {
        let src = WeatherSource::new("http://127.0.0.1:9/v1/forecast");
        let state = load(&src);
        assert!(state.data.is_none(), "weather never fabricates data");
        assert_eq!(state.error_note, Some(UNAVAILABLE_NOTE));
        assert!(!state.loading);
    }
}
