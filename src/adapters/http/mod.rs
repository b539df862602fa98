//! HTTP adapter. axum router over the SubmissionPort.
//!
//! Routes:
//! - `POST /api/contact`    contact form, answers with a confirmation message
//! - `POST /api/send-email` project inquiry form, answers with the provider ack
//! - `GET  /health`

pub mod handlers;
pub mod response;

use crate::domain::SubmissionError;
use crate::ports::SubmissionPort;
use axum::http::{header, HeaderValue, Method};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared, immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub submissions: Arc<dyn SubmissionPort>,
}

/// Build the application router.
///
/// `allowed_origin` adds a CORS layer for the marketing site; `None` leaves
/// cross-origin requests to the browser's default policy.
pub fn router(submissions: Arc<dyn SubmissionPort>, allowed_origin: Option<HeaderValue>) -> Router {
    let state = AppState { submissions };

    let app = Router::new()
        .route(
            "/api/contact",
            post(handlers::contact).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/send-email",
            post(handlers::project_inquiry).fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http());

    match allowed_origin {
        Some(origin) => app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        ),
        None => app,
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());
    SubmissionError::Unexpected(format!("handler panicked: {}", detail)).into_response()
}
