use std::sync::Arc;

use travelease_application::TravelService;
use travelease_core::WeatherProvider;

/// Shared state handed to every route.
pub struct HttpState<S, H, C> {
    pub service: TravelService<S, H, C>,
    pub weather: Arc<dyn WeatherProvider>,
}

impl<S, H, C> HttpState<S, H, C> {
    pub fn new(service: TravelService<S, H, C>, weather: Arc<dyn WeatherProvider>) -> Self {
        Self { service, weather }
    }
}

impl<S, H, C> Clone for HttpState<S, H, C> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            weather: Arc::clone(&self.weather),
        }
    }
}
