use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
        request,
    },
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use travelease_adapters::{
    config::AllowedOrigins,
    http::{
        HttpState,
        routes::{
            add_favorite, get_destination, index, list_destinations, list_favorites, login, me,
            register, remove_favorite, weather,
        },
    },
};
use travelease_application::TravelService;
use travelease_core::{CredentialIssuer, DocumentStore, PasswordHasher, WeatherProvider};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The TravelEase HTTP application: every route wired to one shared service.
pub struct TravelApp {
    router: Router,
}

impl TravelApp {
    /// Create the application from a service and a weather provider
    ///
    /// # Arguments
    /// * `service` - Core operations over the document store
    /// * `weather_provider` - Source for the weather passthrough
    pub fn new<S, H, C>(
        service: TravelService<S, H, C>,
        weather_provider: Arc<dyn WeatherProvider>,
    ) -> Self
    where
        S: DocumentStore + 'static,
        H: PasswordHasher + 'static,
        C: CredentialIssuer + 'static,
    {
        let state = HttpState::new(service, weather_provider);

        let router = Router::new()
            .route("/", get(index))
            .route("/api/auth/register", post(register::<S, H, C>))
            .route("/api/auth/login", post(login::<S, H, C>))
            .route("/api/auth/me", get(me::<S, H, C>))
            .route("/api/destinations", get(list_destinations::<S, H, C>))
            .route("/api/destinations/{id}", get(get_destination::<S, H, C>))
            .route("/api/favorites", get(list_favorites::<S, H, C>))
            .route(
                "/api/favorites/{destination_id}",
                post(add_favorite::<S, H, C>).delete(remove_favorite::<S, H, C>),
            )
            .route("/api/weather", get(weather::<S, H, C>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the app into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the app as a standalone server until the listener fails
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("TravelEase listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
