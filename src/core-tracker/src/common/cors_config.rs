use axum::http::{HeaderValue, Method, header, header::InvalidHeaderValue};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Local frontend dev server and the deployed frontend.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "https://tracker0-eight.vercel.app"];

/// Origins allowed to make cross-origin requests, from the comma-separated env var
/// CORS_ALLOWED_ORIGINS. Falls back to [`DEFAULT_ALLOWED_ORIGINS`] when unset or blank.
pub fn allowed_origins() -> Result<Vec<HeaderValue>, InvalidHeaderValue> {
    match std::env::var("CORS_ALLOWED_ORIGINS") {
        Ok(raw) if !raw.trim().is_empty() => parse_origins(&raw),
        _ => DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect(),
    }
}

/// Splits a comma-separated origin list, skipping empty entries.
pub fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, InvalidHeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(HeaderValue::from_str)
        .collect()
}

/// CORS policy for the JSON API: the listed origins may call every CRUD method with a JSON body.
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
