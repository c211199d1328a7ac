use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::{Duration, Instant};
use tracing::Level;

/// Severity a completed request is logged at: server errors at ERROR, client errors at WARN.
pub fn access_log_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// Whole milliseconds in `elapsed`, saturating at `u64::MAX`.
pub fn duration_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

macro_rules! access_event {
    ($level:ident, $method:expr, $path:expr, $status:expr, $elapsed:expr) => {
        tracing::$level!(
            method = %$method,
            path = %$path,
            status = $status.as_u16(),
            duration_ms = duration_millis($elapsed),
            "route access"
        )
    };
}

/// Middleware that logs each route access with its result
pub async fn log_route_access(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    let status = response.status();

    let level = access_log_level(status);
    if level == Level::ERROR {
        access_event!(error, method, path, status, elapsed);
    } else if level == Level::WARN {
        access_event!(warn, method, path, status, elapsed);
    } else {
        access_event!(info, method, path, status, elapsed);
    }

    response
}
