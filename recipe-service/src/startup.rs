//! Application startup and lifecycle management.

use axum::middleware::from_fn;
use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use service_core::error::AppError;
use service_core::middleware::tracing::{http_span, request_id_middleware};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;
use crate::services::RecipeStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: RecipeStore,
    pub config: Config,
}

/// Endpoint index served at `/`.
async fn service_index() -> impl IntoResponse {
    Json(json!({
        "service": "recipe-service",
        "endpoints": ["/", "/health", "/recipes", "/recipes/{id}"]
    }))
}

/// Health check endpoint for liveness probes.
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "recipe-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Bind the listener and seed the store. Port 0 picks a random port,
    /// which the integration tests use.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let addr = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState {
            store: RecipeStore::seeded(),
            config,
        };

        tracing::info!("Recipe service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        let router = Router::new()
            .route("/", get(service_index))
            .route("/health", get(health_check))
            .route("/recipes", get(handlers::recipes::list_recipes))
            .route(
                "/recipes/:id",
                get(handlers::recipes::get_recipe)
                    .put(handlers::recipes::update_recipe)
                    .patch(handlers::recipes::update_recipe),
            )
            // request_id_middleware is added last so it runs outermost and
            // the span always sees an x-request-id header.
            .layer(TraceLayer::new_for_http().make_span_with(http_span))
            .layer(from_fn(request_id_middleware))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(self.state);

        axum::serve(self.listener, router).await?;

        Ok(())
    }
}
