//! `get_weather_for_city`: geocode a city name, then read current conditions.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::JarvisError;
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::Tool;

pub const NAME: &str = "get_weather_for_city";
const DESCRIPTION: &str =
    r#"Fetches the current weather for a given city. Arguments: {"city_name": string}"#;
const CURRENT_FIELDS: &str = "temperature_2m,weather_code,wind_speed_10m";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WeatherArgs {
    city_name: String,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<Place>>,
}

#[derive(Debug, Deserialize)]
struct Place {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature_2m: serde_json::Number,
    wind_speed_10m: serde_json::Number,
    weather_code: i64,
}

/// Open-Meteo backed weather lookup.
#[derive(Debug, Clone)]
pub struct WeatherTool {
    client: reqwest::Client,
    geocoding_url: String,
    forecast_url: String,
}

impl WeatherTool {
    pub fn new(
        client: reqwest::Client,
        geocoding_url: impl Into<String>,
        forecast_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            geocoding_url: geocoding_url.into(),
            forecast_url: forecast_url.into(),
        }
    }

    async fn locate(&self, city: &str) -> Result<Option<Place>, JarvisError> {
        let resp = self
            .client
            .get(&self.geocoding_url)
            .query(&[("name", city), ("count", "1")])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(unreachable_office)?;
        let data: GeocodingResponse = resp.json().await.map_err(bad_payload)?;
        Ok(data.results.and_then(|places| places.into_iter().next()))
    }

    async fn current(&self, place: &Place) -> Result<CurrentWeather, JarvisError> {
        let latitude = place.latitude.to_string();
        let longitude = place.longitude.to_string();
        let resp = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current", CURRENT_FIELDS),
                ("temperature_unit", "celsius"),
                ("wind_speed_unit", "kmh"),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(unreachable_office)?;
        let data: ForecastResponse = resp.json().await.map_err(bad_payload)?;
        Ok(data.current)
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    async fn execute(&self, args: &ToolArguments) -> Result<String, JarvisError> {
        let WeatherArgs { city_name } = args.deserialize()?;
        let city = city_name.trim();
        debug!(city, "looking up weather");

        let Some(place) = self.locate(city).await? else {
            return Ok(format!("Could not locate a place named '{city}'."));
        };
        let current = self.current(&place).await?;

        Ok(format!(
            "The current weather in {} is {}°C with {} and wind speeds of {} km/h.",
            place.name,
            current.temperature_2m,
            describe_weather_code(current.weather_code),
            current.wind_speed_10m,
        ))
    }
}

/// Coarse WMO weather-code interpretation.
pub fn describe_weather_code(code: i64) -> &'static str {
    match code {
        1..=3 => "Partly cloudy",
        c if c > 40 => "Rainy",
        _ => "Clear skies",
    }
}

fn unreachable_office(e: reqwest::Error) -> JarvisError {
    JarvisError::tool(
        NAME,
        format!("Error contacting the meteorological office: {e}"),
    )
}

fn bad_payload(e: reqwest::Error) -> JarvisError {
    JarvisError::tool(
        NAME,
        format!("There was an issue processing the weather data: {e}"),
    )
}
