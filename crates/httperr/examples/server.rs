//! Minimal service showing how a handler layer reacts to `HttpError`.
//!
//! `GET /4xx` produces an exposed client error returned verbatim as JSON;
//! `GET /5xx` hits an internal failure that is logged and replaced by a
//! generic 500 body.
//!
//! ```text
//! cargo run --example server
//! curl -i 127.0.0.1:3000/4xx
//! curl -i 127.0.0.1:3000/5xx
//! ```

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use httperr::HttpError;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Router::new()
        .route("/", get(hello))
        .route("/4xx", get(forbidden))
        .route("/5xx", get(database_down));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .expect("bind 127.0.0.1:3000");
    info!("listening on 127.0.0.1:3000");
    axum::serve(listener, app).await.expect("serve");
}

async fn hello() -> &'static str {
    "Hello!"
}

async fn forbidden() -> Result<&'static str, AppError> {
    let err = HttpError::builder(403)
        .message("you shall not pass")
        .property("resource", "/4xx")
        .build()
        .expect("403 is a registered error status");
    Err(err.into())
}

async fn database_down() -> Result<&'static str, AppError> {
    Err(AppError::Internal("DB error!".to_string()))
}

/// Handler-level error: a classified HTTP error or a raw internal failure.
enum AppError {
    Http(HttpError),
    Internal(String),
}

impl From<HttpError> for AppError {
    fn from(err: HttpError) -> Self {
        AppError::Http(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Http(err) if err.expose() => {
                warn!(%err, "client error");
                (err.status_code(), Json(err)).into_response()
            }
            AppError::Http(err) => {
                error!(%err, location = %err.location(), "server error, details withheld");
                generic_500()
            }
            AppError::Internal(reason) => {
                error!(reason = %reason, "internal failure");
                generic_500()
            }
        }
    }
}

/// The substitute body sent whenever details must stay server-side.
fn generic_500() -> Response {
    let err = HttpError::new(500).expect("500 is a registered error status");
    (err.status_code(), Json(err)).into_response()
}
