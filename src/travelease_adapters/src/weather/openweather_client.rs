use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use travelease_core::{Coordinates, Weather, WeatherError, WeatherProvider};

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";
const UNITS: &str = "metric";

pub struct OpenWeatherClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl OpenWeatherClient {
    pub fn new(base_url: String, api_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[tracing::instrument(name = "Fetching current weather", skip(self))]
    async fn current_weather(&self, coordinates: Coordinates) -> Result<Weather, WeatherError> {
        let base =
            Url::parse(&self.base_url).map_err(|e| WeatherError::RequestFailed(e.to_string()))?;
        let url = base
            .join(CURRENT_WEATHER_PATH)
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let response = self
            .http_client
            .get(url)
            .query(&[
                ("lat", coordinates.latitude.to_string()),
                ("lon", coordinates.longitude.to_string()),
                ("appid", self.api_key.expose_secret().to_owned()),
                ("units", UNITS.to_owned()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.without_url().to_string()))?
            .error_for_status()
            .map_err(|e| WeatherError::RequestFailed(e.without_url().to_string()))?;

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::UnexpectedResponse(e.without_url().to_string()))?;

        body.try_into()
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainReading,
    weather: Vec<Condition>,
    wind: Wind,
}

#[derive(Debug, Deserialize)]
struct MainReading {
    temp: f64,
    humidity: i64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

impl TryFrom<CurrentWeatherResponse> for Weather {
    type Error = WeatherError;

    fn try_from(response: CurrentWeatherResponse) -> Result<Self, Self::Error> {
        let condition = response
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::UnexpectedResponse("no weather conditions".to_owned()))?;

        Ok(Weather {
            temp: response.main.temp.round() as i64,
            description: condition.description,
            icon: condition.icon,
            humidity: response.main.humidity,
            wind_speed: response.wind.speed,
        })
    }
}
