//! HTTP API server for the order management system.
//!
//! Wires the workflow service and the in-memory repositories into an axum
//! router, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod view;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post, put};
use domain::repository::{CustomerRepository, ProductRepository};
use domain::{BroadcastPublisher, OrderService};
use metrics_exporter_prometheus::PrometheusHandle;
use store::{InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state accessible from all handlers.
///
/// The repository handles are retained alongside the service so catalog
/// endpoints and seeding can reach the stores directly.
pub struct AppState {
    pub order_service: OrderService,
    pub customers: Arc<dyn CustomerRepository>,
    pub products: Arc<dyn ProductRepository>,
}

/// Creates the axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/orders", post(routes::orders::create))
        .route("/orders/{id}", get(routes::orders::get))
        .route("/orders/{id}", delete(routes::orders::cancel))
        .route("/orders/{id}/status", put(routes::orders::update_status))
        .route("/customers", get(routes::customers::list))
        .route("/customers/{id}/orders", get(routes::customers::orders))
        .route("/products", get(routes::products::list))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state over fresh in-memory stores.
///
/// The stores live for the whole process; every handle cloned from them
/// shares the same data. The returned publisher can be subscribed to for
/// domain events.
pub fn create_default_state() -> (Arc<AppState>, BroadcastPublisher) {
    let orders = InMemoryOrderRepository::new();
    let customers = InMemoryCustomerRepository::new();
    let products = InMemoryProductRepository::new();
    let publisher = BroadcastPublisher::new(256);

    let order_service = OrderService::new(
        Arc::new(orders),
        Arc::new(customers.clone()),
        Arc::new(products.clone()),
        Arc::new(publisher.clone()),
    );

    let state = Arc::new(AppState {
        order_service,
        customers: Arc::new(customers),
        products: Arc::new(products),
    });

    (state, publisher)
}
