use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Creates a CORS layer that admits exactly one origin.
///
/// Allows GET, POST, PUT, DELETE and OPTIONS with the `Content-Type`,
/// `Authorization` and `Accept` request headers. Preflight results are cached
/// for an hour.
pub fn create_cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Parses a configured origin such as `http://localhost:3000`.
pub fn parse_origin(origin: &str) -> io::Result<HeaderValue> {
    let trimmed = origin.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS origin cannot be empty",
        ));
    }

    trimmed.parse::<HeaderValue>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid CORS origin '{}': {}", origin, e),
        )
    })
}
