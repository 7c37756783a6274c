use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::{format_duration, format_number};

/// HTTP request log line
///
/// `HH:MM:SS | duration | size | status method path`, time in cyan for 2xx,
/// yellow otherwise.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Buffer the body to report its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("{} {} failed to read response body: {}", method, path, e);
            return Response::from_parts(parts, Body::default());
        }
    };

    let color_code = if parts.status.is_success() { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>7} | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        format_duration(start.elapsed()),
        format_number(bytes.len()),
        parts.status.as_u16(),
        method,
        path
    );
    if parts.status.is_server_error() {
        tracing::error!("{} {} -> {}", method, path, parts.status);
    }

    Response::from_parts(parts, Body::from(bytes))
}
