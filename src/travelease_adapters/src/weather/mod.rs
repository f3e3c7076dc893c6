pub mod mock_weather_provider;
pub mod openweather_client;

pub use mock_weather_provider::MockWeatherProvider;
pub use openweather_client::OpenWeatherClient;
