pub mod adapters;
pub mod config;
pub mod crypto;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod ports;
pub mod qr;
pub mod response;
pub mod schemas;
pub mod use_cases;
pub mod validation;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::middleware as axum_middleware;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::ports::TransactionRepository;
use crate::use_cases::{GenerateQr, ListTransactions, ProcessPayment};

#[derive(Clone)]
pub struct AppState {
    pub qr_generator: GenerateQr,
    pub payments: ProcessPayment,
    pub transactions: ListTransactions,
    pub secret_key: String,
}

impl AppState {
    pub fn new(repository: Arc<dyn TransactionRepository>, secret_key: String) -> Self {
        Self {
            qr_generator: GenerateQr::new(repository.clone()),
            payments: ProcessPayment::new(repository.clone()),
            transactions: ListTransactions::new(repository),
            secret_key,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let qr_routes = Router::new()
        .route(
            "/generate",
            post(handlers::qr::generate_qr).layer(axum_middleware::from_fn_with_state(
                state.clone(),
                middleware::signature::verify_qr_signature,
            )),
        )
        .route(
            "/payment",
            post(handlers::payment::process_payment).layer(axum_middleware::from_fn_with_state(
                state.clone(),
                middleware::signature::verify_payment_signature,
            )),
        );

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1/qr", qr_routes)
        .route(
            "/api/v1/transactions",
            get(handlers::payment::get_transactions),
        )
        .layer(axum_middleware::from_fn(
            middleware::request_logger::request_logger_middleware,
        ))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:5173"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-signature"),
        ])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
}
