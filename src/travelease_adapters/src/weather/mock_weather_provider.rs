use async_trait::async_trait;
use travelease_core::{Coordinates, Weather, WeatherError, WeatherProvider};

/// Fixed sample reading, used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockWeatherProvider;

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn current_weather(&self, _coordinates: Coordinates) -> Result<Weather, WeatherError> {
        Ok(Weather {
            temp: 22,
            description: "Clear sky".to_owned(),
            icon: "01d".to_owned(),
            humidity: 65,
            wind_speed: 5.2,
        })
    }
}
