//! Fixed response headers matching the API gateway contract
//!
//! The website is served from a different origin than the API, and the
//! gateway in front of this service forwards responses as-is. Every response
//! therefore carries the same header set the gateway advertises, success and
//! failure alike.

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Headers a browser may send on cross-origin calls
pub const ALLOW_HEADERS: &str =
    "Origin,Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

/// Methods exposed through the gateway
pub const ALLOW_METHODS: &str = "GET,OPTIONS,POST";

/// The site is public; any origin may call it
pub const ALLOW_ORIGIN: &str = "*";

/// Adds the fixed gateway headers to every response
pub async fn apply_gateway_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );

    response
}
