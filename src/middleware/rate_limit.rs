use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};

use crate::error::{AppError, AppResult};

/// Type alias for the global governor layer (IP-based rate limiting)
pub type GlobalGovernorLayer = GovernorLayer<
    tower_governor::key_extractor::PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware<governor::clock::QuantaInstant>,
    Body,
>;

/// Create a GovernorLayer for rate limiting per IP address
/// - one token every 100ms (600 per minute)
/// - bursts of 120, enough for a page load plus a geolocation round trip
pub fn create_global_governor() -> AppResult<GlobalGovernorLayer> {
    let config = GovernorConfigBuilder::default()
        .per_millisecond(100)
        .burst_size(120)
        .finish()
        .ok_or_else(|| AppError::Config("Invalid rate limit settings".to_string()))?;

    Ok(GovernorLayer::new(Arc::new(config)))
}

/// Middleware to log request details and failed or rate limited responses
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    tracing::debug!(
        client_ip = %addr.ip(),
        method = %method,
        uri = %uri,
        "Incoming request"
    );

    let response = next.run(request).await;
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!(
            client_ip = %addr.ip(),
            method = %method,
            uri = %uri,
            "Rate limited"
        );
    } else if status.is_client_error() || status.is_server_error() {
        tracing::warn!(
            client_ip = %addr.ip(),
            method = %method,
            uri = %uri,
            status = %status,
            "Request failed"
        );
    }

    response
}
